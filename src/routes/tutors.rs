use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::tutors::requests::{
    TutorDetailParams, TutorListParams, UpdateOfferingsRequest, UpdateTutorProfileRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TutorService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TutorService 实例
static TUTOR_SERVICE: Lazy<TutorService> = Lazy::new(TutorService::new_lazy);

// 列出导师（搜索 + 科目/学段过滤）
pub async fn list_tutors(
    req: HttpRequest,
    query: web::Query<TutorListParams>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.list_tutors(&req, query.into_inner()).await
}

// 导师详情（含雇佣统计、评价统计；学生视角带雇佣状态）
pub async fn get_tutor_detail(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<TutorDetailParams>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE
        .get_tutor_detail(&req, path.0, query.into_inner())
        .await
}

// 导师开设组合
pub async fn get_offerings(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.get_offerings(&req, path.0).await
}

// 整体替换导师开设组合
pub async fn update_offerings(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateOfferingsRequest>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE
        .update_offerings(&req, path.0, body.into_inner())
        .await
}

// 更新导师资料
pub async fn update_profile(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateTutorProfileRequest>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE
        .update_profile(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_tutors_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tutors")
            .wrap(middlewares::RequireJWT)
            // 列表与详情 - 所有登录用户可访问
            .service(web::resource("").route(web::get().to(list_tutors)))
            .service(web::resource("/{id}").route(web::get().to(get_tutor_detail)))
            .service(
                web::resource("/{id}/offerings")
                    // 查询 - 所有登录用户；更新 - 导师本人或管理员（业务层校验归属）
                    .route(web::get().to(get_offerings))
                    .route(
                        web::put()
                            .to(update_offerings)
                            .wrap(middlewares::RequireRole::new_any(UserRole::tutor_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/profile").route(
                    web::put()
                        .to(update_profile)
                        .wrap(middlewares::RequireRole::new_any(UserRole::tutor_roles())),
                ),
            ),
    );
}
