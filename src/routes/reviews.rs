use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{CreateReviewRequest, ReviewListParams};
use crate::models::users::entities::UserRole;
use crate::services::ReviewService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// 分页列出导师的评价
pub async fn list_reviews(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<ReviewListParams>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .list_reviews(&req, path.0, query.into_inner())
        .await
}

// 学生评价导师
pub async fn create_review(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<CreateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .create_review(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_reviews_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tutor/{id}/reviews")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 查看评价 - 所有登录用户
                    .route(web::get().to(list_reviews))
                    // 写评价 - 仅学生
                    .route(
                        web::post()
                            .to(create_review)
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            ),
    );
}
