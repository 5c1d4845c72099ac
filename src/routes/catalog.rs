use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::catalog::requests::{CreateAcademicLevelRequest, CreateSubjectRequest};
use crate::models::users::entities::UserRole;
use crate::services::CatalogService;

// 懒加载的全局 CatalogService 实例
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

// 获取参考数据（科目 + 学段）
pub async fn get_catalog(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_catalog(&req).await
}

// 创建科目
pub async fn create_subject(
    req: HttpRequest,
    body: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_subject(&req, body.into_inner()).await
}

// 创建学段
pub async fn create_academic_level(
    req: HttpRequest,
    body: web::Json<CreateAcademicLevelRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_academic_level(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/catalog")
            .wrap(middlewares::RequireJWT)
            // 参考数据 - 所有登录用户可访问
            .service(web::resource("").route(web::get().to(get_catalog)))
            // 目录维护 - 仅管理员
            .service(
                web::resource("/subjects")
                    .route(web::post().to(create_subject))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/levels")
                    .route(web::post().to(create_academic_level))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
