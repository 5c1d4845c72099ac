use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmissionListParams};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 列出提交（角色范围过滤在业务层）
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// 导师评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            // 列出提交 - 所有登录用户（业务层按角色收窄范围）
            .service(web::resource("").route(web::get().to(list_submissions)))
            // 评分 - 仅导师和管理员（归属在业务层校验）
            .service(
                web::resource("/{id}/grade").route(
                    web::post()
                        .to(grade_submission)
                        .wrap(middlewares::RequireRole::new_any(UserRole::tutor_roles())),
                ),
            ),
    );
}
