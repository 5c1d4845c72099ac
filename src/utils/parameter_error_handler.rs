//! 请求参数错误处理器
//!
//! JSON 请求体和查询参数解析失败时返回统一响应格式而不是 actix 默认的纯文本。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("请求体解析失败: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("查询参数解析失败: {detail}"),
    ));
    error::InternalError::from_response(err, response).into()
}
