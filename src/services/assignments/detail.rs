use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::AssignmentDetailResponse;
use crate::models::assignments::status::derive_assignment_status;
use crate::models::users::entities::UserRole;
use crate::models::users::responses::UserSummary;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
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

    // 归属检查：作业双方或管理员可见
    let allowed = match current_user.role {
        UserRole::Admin => true,
        UserRole::Tutor => assignment.tutor_id == current_user.id,
        UserRole::Student | UserRole::Parent => assignment.student_id == current_user.id,
    };
    if !allowed {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "没有查看该作业的权限",
        )));
    }

    let submission = match storage
        .get_submission_for_assignment(assignment.id, assignment.student_id)
        .await
    {
        Ok(submission) => submission,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    let tutor = storage
        .get_user_by_id(assignment.tutor_id)
        .await
        .ok()
        .flatten()
        .map(|u| UserSummary::from(&u));
    let student = storage
        .get_user_by_id(assignment.student_id)
        .await
        .ok()
        .flatten()
        .map(|u| UserSummary::from(&u));

    let submissions: Vec<_> = submission.iter().cloned().collect();
    let status = derive_assignment_status(&assignment, &submissions, chrono::Utc::now());

    let response = AssignmentDetailResponse {
        assignment,
        tutor,
        student,
        submission,
        status,
        status_variant: status.display_variant().to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
