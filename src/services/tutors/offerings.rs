use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TutorService;
use crate::middlewares::RequireJWT;
use crate::models::tutors::requests::UpdateOfferingsRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::catalog::CatalogCache;

pub async fn get_offerings(
    service: &TutorService,
    request: &HttpRequest,
    tutor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_tutor_offerings(tutor_id).await {
        Ok(offerings) => Ok(HttpResponse::Ok().json(ApiResponse::success(offerings, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询开设组合失败: {e}"),
            )),
        ),
    }
}

/// 整体替换导师的开设组合
///
/// 导师只能修改自己的组合，管理员可以修改任意导师的。
/// 每个组合的科目与学段必须存在于参考数据中。
pub async fn update_offerings(
    service: &TutorService,
    request: &HttpRequest,
    tutor_id: i64,
    req: UpdateOfferingsRequest,
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

    if current_user.role != UserRole::Admin && current_user.id != tutor_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能修改自己的开设组合",
        )));
    }

    // 校验每个组合的科目/学段均存在
    for pair in &req.offerings {
        let subject_ok = match CatalogCache::subject_exists(pair.subject_id).await {
            Some(exists) => exists,
            None => match storage.list_subjects().await {
                Ok(subjects) => subjects.iter().any(|s| s.id == pair.subject_id),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询科目失败: {e}"),
                        ),
                    ));
                }
            },
        };
        if !subject_ok {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("科目不存在: {}", pair.subject_id),
            )));
        }

        let level_ok = match CatalogCache::academic_level_exists(pair.academic_level_id).await {
            Some(exists) => exists,
            None => match storage.list_academic_levels().await {
                Ok(levels) => levels.iter().any(|l| l.id == pair.academic_level_id),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询学段失败: {e}"),
                        ),
                    ));
                }
            },
        };
        if !level_ok {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AcademicLevelNotFound,
                format!("学段不存在: {}", pair.academic_level_id),
            )));
        }
    }

    match storage.set_tutor_offerings(tutor_id, req.offerings).await {
        Ok(offerings) => Ok(HttpResponse::Ok().json(ApiResponse::success(offerings, "更新成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新开设组合失败: {e}"),
            )),
        ),
    }
}
