use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CatalogCache, CatalogService};
use crate::models::catalog::requests::{CreateAcademicLevelRequest, CreateSubjectRequest};
use crate::models::{ApiResponse, ErrorCode};

/// 管理端创建科目，成功后失效参考数据缓存
pub async fn create_subject(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let name = req.name.trim();
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "科目名称不能为空",
        )));
    }

    match storage.create_subject(name).await {
        Ok(subject) => {
            CatalogCache::invalidate().await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建科目失败: {e}"),
            )),
        ),
    }
}

/// 管理端创建学段，成功后失效参考数据缓存
pub async fn create_academic_level(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateAcademicLevelRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let name = req.name.trim();
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学段名称不能为空",
        )));
    }

    match storage.create_academic_level(name).await {
        Ok(level) => {
            CatalogCache::invalidate().await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(level, "创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建学段失败: {e}"),
            )),
        ),
    }
}
