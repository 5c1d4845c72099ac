//! 学生评价导师
//!
//! 每个 (student, tutor) 组合至多一条评价，写入后不可修改。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::reviews::requests::CreateReviewRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_rating;

pub async fn create_review(
    service: &ReviewService,
    request: &HttpRequest,
    tutor_id: i64,
    req: CreateReviewRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    if let Err(msg) = validate_rating(req.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingInvalid, msg)));
    }

    if req.review_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "评价内容不能为空",
        )));
    }

    // 导师存在且角色正确
    match storage.get_user_by_id(tutor_id).await {
        Ok(Some(tutor)) if tutor.role == UserRole::Tutor => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TutorNotFound,
                "导师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询导师失败: {e}"),
                )),
            );
        }
    }

    // 唯一性：每个学生对每个导师只能评价一次
    match storage
        .get_review_by_student_and_tutor(current_user.id, tutor_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ReviewAlreadyExists,
                "已评价过该导师",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评价失败: {e}"),
                )),
            );
        }
    }

    match storage.create_review(tutor_id, current_user.id, req).await {
        Ok(review) => {
            tracing::info!(
                "Review {} created: student {} -> tutor {} ({} stars)",
                review.id,
                review.student_id,
                review.tutor_id,
                review.rating
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(review, "评价成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建评价失败: {e}"),
            )),
        ),
    }
}
