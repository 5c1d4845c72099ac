//! 导师处理雇佣请求
//!
//! 状态机约束：只有 pending 请求可以被接受或拒绝；
//! accepted 是终态，rejected 由学生重新提交产生新请求。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HireService;
use crate::middlewares::RequireJWT;
use crate::models::hires::entities::HireStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn respond_hire_request(
    service: &HireService,
    request: &HttpRequest,
    hire_id: i64,
    decision: HireStatus,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    debug_assert!(matches!(
        decision,
        HireStatus::Accepted | HireStatus::Rejected
    ));

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    let hire = match storage.get_hire_request_by_id(hire_id).await {
        Ok(Some(hire)) => hire,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::HireRequestNotFound,
                "雇佣请求不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询雇佣请求失败: {e}"),
                )),
            );
        }
    };

    // 只有被请求的导师本人（或管理员）能处理
    if current_user.role != UserRole::Admin && current_user.id != hire.tutor_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能处理发给自己的雇佣请求",
        )));
    }

    if !hire.status.can_respond() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::HireNotPending,
            format!("请求已处理，当前状态: {}", hire.status),
        )));
    }

    match storage.respond_hire_request(hire_id, decision).await {
        Ok(Some(updated)) => {
            tracing::info!(
                "Hire request {} {} by tutor {}",
                updated.id,
                updated.status,
                hire.tutor_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "处理成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HireRequestNotFound,
            "雇佣请求不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("处理雇佣请求失败: {e}"),
            )),
        ),
    }
}
