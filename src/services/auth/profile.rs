use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::requests::UpdateProfileRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

use super::AuthService;

/// 更新当前用户的个人资料
///
/// 角色和状态不能通过该入口修改。
pub async fn handle_update_profile(
    service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "未登录",
            )));
        }
    };

    // 密码变更需要通过策略校验后重新哈希
    let password_hash = match update_request.password {
        Some(ref password) => {
            if let Err(msg) = validate_password_simple(password) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
            }
            match hash_password(password) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    tracing::error!("Failed to hash password during profile update: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(ErrorCode::InternalServerError, "更新失败"),
                    ));
                }
            }
        }
        None => None,
    };

    let update = UpdateUserRequest {
        email: None,
        password: password_hash,
        role: None,
        status: None,
        display_name: update_request.display_name,
        avatar_url: update_request.avatar_url,
    };

    match storage.update_user(user.id, update).await {
        Ok(Some(updated)) => Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新用户资料失败: {e}"),
            )),
        ),
    }
}
