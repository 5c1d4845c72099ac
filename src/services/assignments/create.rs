use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 导师布置作业
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    tutor_id: i64,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "作业标题不能为空",
        )));
    }

    // 接收方必须是学生
    match storage.get_user_by_id(req.student_id).await {
        Ok(Some(student)) if student.role == UserRole::Student => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    match storage.create_assignment(tutor_id, req).await {
        Ok(assignment) => {
            tracing::info!(
                "Assignment {} created by tutor {} for student {}",
                assignment.id,
                assignment.tutor_id,
                assignment.student_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "作业已创建")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
