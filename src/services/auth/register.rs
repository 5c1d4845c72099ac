use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::requests::RegisterRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 校验输入
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    // 2. 管理员只能由管理端创建
    if register_request.role == UserRole::Admin {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RegisterFailed,
            "无法注册管理员账号",
        )));
    }

    // 3. 检查用户名/邮箱是否已被占用
    match storage.get_user_by_username(&register_request.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "用户名已被占用",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    }

    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "邮箱已被占用",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    }

    // 4. 哈希密码并创建用户
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password during register: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "注册失败",
                )),
            );
        }
    };

    let create_request = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: password_hash,
        role: register_request.role,
        display_name: register_request.display_name,
        avatar_url: None,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("User {} registered (role: {})", user.username, user.role);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "注册成功")))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::RegisterFailed,
            format!("注册失败: {e}"),
        ))),
    }
}
