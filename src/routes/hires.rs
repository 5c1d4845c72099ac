use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::hires::entities::HireStatus;
use crate::models::hires::requests::{CreateHireRequest, HireListParams};
use crate::models::users::entities::UserRole;
use crate::services::HireService;
use crate::utils::SafeIDI64;

// 懒加载的全局 HireService 实例
static HIRE_SERVICE: Lazy<HireService> = Lazy::new(HireService::new_lazy);

// 学生提交雇佣请求
pub async fn create_hire_request(
    req: HttpRequest,
    body: web::Json<CreateHireRequest>,
) -> ActixResult<HttpResponse> {
    HIRE_SERVICE
        .create_hire_request(&req, body.into_inner())
        .await
}

// 列出雇佣请求（角色范围过滤在业务层）
pub async fn list_hire_requests(
    req: HttpRequest,
    query: web::Query<HireListParams>,
) -> ActixResult<HttpResponse> {
    HIRE_SERVICE
        .list_hire_requests(&req, query.into_inner())
        .await
}

// 导师接受请求
pub async fn accept_hire_request(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HIRE_SERVICE
        .respond_hire_request(&req, path.0, HireStatus::Accepted)
        .await
}

// 导师拒绝请求
pub async fn reject_hire_request(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HIRE_SERVICE
        .respond_hire_request(&req, path.0, HireStatus::Rejected)
        .await
}

// 配置路由
pub fn configure_hires_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/hires")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出请求 - 所有登录用户（业务层按角色收窄范围）
                    .route(web::get().to(list_hire_requests))
                    // 提交请求 - 仅学生和家长
                    .route(
                        web::post()
                            .to(create_hire_request)
                            .wrap(RateLimit::hire_submit())
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ),
            )
            // 接受/拒绝 - 仅导师和管理员（归属在业务层校验）
            .service(
                web::resource("/{id}/accept").route(
                    web::post()
                        .to(accept_hire_request)
                        .wrap(middlewares::RequireRole::new_any(UserRole::tutor_roles())),
                ),
            )
            .service(
                web::resource("/{id}/reject").route(
                    web::post()
                        .to(reject_hire_request)
                        .wrap(middlewares::RequireRole::new_any(UserRole::tutor_roles())),
                ),
            ),
    );
}
