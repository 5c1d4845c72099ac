use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HireService;
use crate::middlewares::RequireJWT;
use crate::models::hires::requests::{HireListParams, HireListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_hire_requests(
    service: &HireService,
    request: &HttpRequest,
    mut params: HireListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let user_role = RequireJWT::extract_user_role(request);
    let user_id = RequireJWT::extract_user_id(request);

    // 权限检查：学生/家长只能看自己发起的请求，导师只能看发给自己的请求
    match user_role {
        Some(UserRole::Admin) => {
            // 管理员可以按任意双方过滤
        }
        Some(UserRole::Tutor) => {
            if let Some(uid) = user_id {
                params.tutor_id = Some(uid);
            } else {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "无法获取用户信息",
                )));
            }
        }
        Some(UserRole::Student) | Some(UserRole::Parent) => {
            if let Some(uid) = user_id {
                params.student_id = Some(uid);
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

    let query = HireListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        status: params.status,
        tutor_id: params.tutor_id,
        student_id: params.student_id,
    };

    match storage.list_hire_requests_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询雇佣请求列表失败: {e}"),
            )),
        ),
    }
}
