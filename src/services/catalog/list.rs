use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CatalogCache, CatalogService};
use crate::models::catalog::responses::CatalogResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 获取参考数据（科目 + 学段）
///
/// 优先读缓存；失效时回源存储层并重建缓存。
pub async fn get_catalog(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(catalog) = CatalogCache::get().await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(catalog, "查询成功")));
    }

    let storage = service.get_storage(request);

    let subjects = match storage.list_subjects().await {
        Ok(subjects) => subjects,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };

    let academic_levels = match storage.list_academic_levels().await {
        Ok(levels) => levels,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学段失败: {e}"),
                )),
            );
        }
    };

    CatalogCache::init(subjects.clone(), academic_levels.clone()).await;

    let catalog = CatalogResponse {
        subjects,
        academic_levels,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(catalog, "查询成功")))
}
