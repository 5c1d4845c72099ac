use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::assignments::requests::{AssignmentListParams, CreateAssignmentRequest};
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{AssignmentService, SubmissionService};
use crate::utils::SafeIDI64;

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 列出作业（派生状态 + 搜索/状态/科目/学段过滤）
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

// 导师布置作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let tutor_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .create_assignment(&req, tutor_id, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 学生提交作业
pub async fn create_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出作业 - 所有登录用户（业务层按角色收窄范围）
                    .route(web::get().to(list_assignments))
                    // 布置作业 - 仅导师和管理员
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::tutor_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 作业详情 - 作业双方或管理员（业务层校验归属）
                    .route(web::get().to(get_assignment)),
            )
            .service(
                web::resource("/{id}/submissions")
                    // 提交作业 - 仅学生
                    .route(
                        web::post()
                            .to(create_submission)
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            ),
    );
}
