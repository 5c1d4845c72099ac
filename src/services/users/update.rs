use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    mut req: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = req.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Some(ref password) = req.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }
        req.password = match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::error!("Failed to hash password during user update: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(ErrorCode::InternalServerError, "更新用户失败"),
                ));
            }
        };
    }

    match storage.update_user(user_id, req).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新用户失败: {e}"),
            )),
        ),
    }
}
