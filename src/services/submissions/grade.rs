//! 导师评分
//!
//! 状态转移：submitted -> graded，写入分数（0-100）和反馈。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade;

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    if let Err(msg) = validate_grade(req.grade) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeInvalid, msg)));
    }

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    // 只有布置该作业的导师（或管理员）能评分
    if current_user.role != UserRole::Admin {
        let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
            Ok(Some(assignment)) => assignment,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentNotFound,
                    "作业不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询作业失败: {e}"),
                    )),
                );
            }
        };

        if assignment.tutor_id != current_user.id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只能评分自己布置的作业",
            )));
        }
    }

    if submission.is_graded() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubmissionAlreadyGraded,
            "该提交已评分",
        )));
    }

    match storage.grade_submission(submission_id, req).await {
        Ok(Some(graded)) => {
            tracing::info!(
                "Submission {} graded: {:?}",
                graded.id,
                graded.grade
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "评分成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
