use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TutorService;
use crate::middlewares::RequireJWT;
use crate::models::tutors::requests::TutorDetailParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 导师详情
///
/// 雇佣统计每次读取时从存储层重新计算。学生/家长访问时默认带上
/// 自己与该导师的雇佣状态；student_id 查询参数仅管理员可指定他人。
pub async fn get_tutor_detail(
    service: &TutorService,
    request: &HttpRequest,
    tutor_id: i64,
    params: TutorDetailParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = RequireJWT::extract_user_claims(request);

    let student_id = match current_user {
        Some(ref user) => match user.role {
            UserRole::Student | UserRole::Parent => Some(user.id),
            UserRole::Admin => params.student_id,
            UserRole::Tutor => None,
        },
        None => None,
    };

    match storage.get_tutor_detail(tutor_id, student_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TutorNotFound,
            "导师不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询导师详情失败: {e}"),
            )),
        ),
    }
}
