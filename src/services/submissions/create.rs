//! 学生提交作业
//!
//! 业务规则：一个学生对一个作业至多一次提交；迟交标志在提交时
//! 依据截止时间写入，之后不再改变。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    req: CreateSubmissionRequest,
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

    // 作业必须存在且布置给当前学生
    let assignment = match storage.get_assignment_by_id(assignment_id).await {
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

    if assignment.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能提交布置给自己的作业",
        )));
    }

    // 重复提交拦截
    match storage
        .get_submission_for_assignment(assignment_id, current_user.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubmissionAlreadyExists,
                "该作业已提交过",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    }

    let now = chrono::Utc::now();
    let is_late = assignment.due_date.map(|due| now > due).unwrap_or(false);

    match storage
        .create_submission(assignment_id, current_user.id, is_late, req)
        .await
    {
        Ok(submission) => {
            tracing::info!(
                "Submission {} created for assignment {} (late: {})",
                submission.id,
                assignment_id,
                submission.is_late
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建提交失败: {e}"),
            )),
        ),
    }
}
