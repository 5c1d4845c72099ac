use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::responses::{RefreshTokenResponse, UserInfoResponse},
};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 使用 Cookie 中的 Refresh Token 换取新的 Access Token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let refresh_token = match JwtUtils::extract_refresh_token_from_cookie(request) {
        Some(token) => token,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Missing refresh token",
            )));
        }
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => {
            let response = RefreshTokenResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Token refreshed")))
        }
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Refresh failed",
            )))
        }
    }
}

/// 获取当前登录用户信息
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(UserInfoResponse { user }, "查询成功"))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        ))),
    }
}
