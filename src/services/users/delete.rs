use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    current_user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许删除自己
    if user_id == current_user_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "不能删除当前登录的账号",
        )));
    }

    match storage.delete_user(user_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除用户失败: {e}"),
            )),
        ),
    }
}
