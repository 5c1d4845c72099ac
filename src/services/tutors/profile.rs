use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TutorService;
use crate::middlewares::RequireJWT;
use crate::models::tutors::requests::UpdateTutorProfileRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 更新导师资料；导师本人或管理员可操作
pub async fn update_profile(
    service: &TutorService,
    request: &HttpRequest,
    tutor_id: i64,
    req: UpdateTutorProfileRequest,
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

    if current_user.role != UserRole::Admin && current_user.id != tutor_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能修改自己的导师资料",
        )));
    }

    if let Some(rate) = req.hourly_rate
        && (rate < 0.0 || rate.is_nan())
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "费率不能为负数",
        )));
    }

    match storage.update_tutor_profile(tutor_id, req).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(profile, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TutorNotFound,
            "导师不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新导师资料失败: {e}"),
            )),
        ),
    }
}
