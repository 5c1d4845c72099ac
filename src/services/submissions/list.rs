use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::{SubmissionListParams, SubmissionListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    params: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let user_role = RequireJWT::extract_user_role(request);
    let user_id = RequireJWT::extract_user_id(request);

    let mut query = SubmissionListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        assignment_id: params.assignment_id,
        student_id: None,
        tutor_id: None,
        status: params.status,
    };

    // 权限检查：学生/家长只能看自己的提交，导师只能看自己布置作业的提交
    match user_role {
        Some(UserRole::Admin) => {}
        Some(UserRole::Tutor) => {
            if let Some(uid) = user_id {
                query.tutor_id = Some(uid);
            } else {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "无法获取用户信息",
                )));
            }
        }
        Some(UserRole::Student) | Some(UserRole::Parent) => {
            if let Some(uid) = user_id {
                query.student_id = Some(uid);
            } else {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "无法获取用户信息",
                )));
            }
        }
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    }

    match storage.list_submissions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交列表失败: {e}"),
            )),
        ),
    }
}
