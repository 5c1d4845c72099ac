//! 路径参数安全提取器
//!
//! 路径里的 `{id}` 在进入业务层之前完成解析和正数校验，
//! 非法取值直接返回 400，统一响应格式。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从路径 `{id}` 提取正的 i64
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => {
                let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                    ErrorCode::BadRequest,
                    "无效的ID参数",
                ));
                Err(InternalError::from_response("invalid id parameter", response).into())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let result = SafeIDI64::from_request(&req, &mut Payload::None).await;
        assert_eq!(result.expect("id should parse").0, 42);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_rejected() {
        let req = TestRequest::default()
            .param("id", "abc")
            .to_http_request();
        assert!(SafeIDI64::from_request(&req, &mut Payload::None).await.is_err());
    }

    #[actix_web::test]
    async fn test_non_positive_id_rejected() {
        let req = TestRequest::default().param("id", "0").to_http_request();
        assert!(SafeIDI64::from_request(&req, &mut Payload::None).await.is_err());

        let req = TestRequest::default().param("id", "-5").to_http_request();
        assert!(SafeIDI64::from_request(&req, &mut Payload::None).await.is_err());
    }
}
