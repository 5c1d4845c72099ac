//! 雇佣请求提交
//!
//! 提交前的全部校验在这里完成，任何一步失败都不会落库：
//! 科目/学段选择 -> 参考数据存在性 -> 导师开设组合匹配 -> 活跃请求唯一性。
//! 被拒绝的请求不占用唯一名额，学生重新提交会产生新的 pending 请求。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HireService;
use crate::middlewares::RequireJWT;
use crate::models::hires::requests::CreateHireRequest;
use crate::models::tutors::entities::TutorOffering;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::catalog::CatalogCache;

/// 提交前校验结果
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum OfferingSelection {
    Valid,
    // 科目或学段未选择
    MissingSelection,
    // 所选组合不在导师开设范围内
    Mismatch,
}

/// 校验所选（科目，学段）组合
///
/// 纯函数：组合必须完整，且逐项匹配导师开设的组合之一。
/// 科目属于另一个学段的情况（如导师只开 GCSE 数学，学生选了
/// A-Level 数学）同样判为不匹配。
pub(crate) fn validate_offering_selection(
    offerings: &[TutorOffering],
    subject_id: i64,
    academic_level_id: i64,
) -> OfferingSelection {
    if subject_id <= 0 || academic_level_id <= 0 {
        return OfferingSelection::MissingSelection;
    }

    if offerings
        .iter()
        .any(|o| o.matches(subject_id, academic_level_id))
    {
        OfferingSelection::Valid
    } else {
        OfferingSelection::Mismatch
    }
}

pub async fn create_hire_request(
    service: &HireService,
    request: &HttpRequest,
    req: CreateHireRequest,
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

    // 1. 参考数据存在性（缓存未命中时回源）
    let subject_ok = match CatalogCache::subject_exists(req.subject_id).await {
        Some(exists) => exists,
        None => match storage.list_subjects().await {
            Ok(subjects) => subjects.iter().any(|s| s.id == req.subject_id),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询科目失败: {e}"),
                    )),
                );
            }
        },
    };
    if !subject_ok {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "所选科目不存在",
        )));
    }

    let level_ok = match CatalogCache::academic_level_exists(req.academic_level_id).await {
        Some(exists) => exists,
        None => match storage.list_academic_levels().await {
            Ok(levels) => levels.iter().any(|l| l.id == req.academic_level_id),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询学段失败: {e}"),
                    )),
                );
            }
        },
    };
    if !level_ok {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AcademicLevelNotFound,
            "所选学段不存在",
        )));
    }

    // 2. 导师存在且角色正确
    match storage.get_user_by_id(req.tutor_user_id).await {
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

    // 3. 组合必须在导师开设范围内
    let offerings = match storage.get_tutor_offerings(req.tutor_user_id).await {
        Ok(offerings) => offerings,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询开设组合失败: {e}"),
                )),
            );
        }
    };

    match validate_offering_selection(&offerings, req.subject_id, req.academic_level_id) {
        OfferingSelection::Valid => {}
        OfferingSelection::MissingSelection => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "请选择科目和学段",
            )));
        }
        OfferingSelection::Mismatch => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::HireOfferingMismatch,
                "该导师未开设所选的科目与学段组合",
            )));
        }
    }

    // 4. 同一组合下至多一个活跃请求；被拒绝的请求不占名额，可重新提交
    match storage
        .find_active_hire_request(
            current_user.id,
            req.tutor_user_id,
            req.subject_id,
            req.academic_level_id,
        )
        .await
    {
        Ok(Some(active)) => {
            let message = if active.status.can_respond() {
                "已有待处理的雇佣请求，请等待导师回复"
            } else {
                "该组合的雇佣请求已被接受"
            };
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::HireDuplicateActive,
                message,
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询活跃请求失败: {e}"),
                )),
            );
        }
    }

    // 5. 落库，返回权威记录；聚合统计由读取方从存储层重新计算
    match storage.create_hire_request(current_user.id, req).await {
        Ok(hire) => {
            tracing::info!(
                "Hire request {} created: student {} -> tutor {}",
                hire.id,
                hire.student_id,
                hire.tutor_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(hire, "雇佣请求已提交")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建雇佣请求失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(id: i64, subject_id: i64, academic_level_id: i64) -> TutorOffering {
        TutorOffering {
            id,
            tutor_id: 1,
            subject_id,
            academic_level_id,
        }
    }

    // 导师开设 {数学@GCSE, 物理@A-Level}
    fn sample_offerings() -> Vec<TutorOffering> {
        vec![offering(1, 10, 1), offering(2, 20, 2)]
    }

    #[test]
    fn test_valid_pair_passes() {
        assert_eq!(
            validate_offering_selection(&sample_offerings(), 10, 1),
            OfferingSelection::Valid
        );
        assert_eq!(
            validate_offering_selection(&sample_offerings(), 20, 2),
            OfferingSelection::Valid
        );
    }

    #[test]
    fn test_subject_from_other_level_is_mismatch() {
        // 数学只开在 GCSE，选 A-Level+数学被拒
        assert_eq!(
            validate_offering_selection(&sample_offerings(), 10, 2),
            OfferingSelection::Mismatch
        );
    }

    #[test]
    fn test_missing_selection_is_rejected() {
        assert_eq!(
            validate_offering_selection(&sample_offerings(), 0, 1),
            OfferingSelection::MissingSelection
        );
        assert_eq!(
            validate_offering_selection(&sample_offerings(), 10, 0),
            OfferingSelection::MissingSelection
        );
    }

    #[test]
    fn test_unknown_pair_is_mismatch() {
        assert_eq!(
            validate_offering_selection(&sample_offerings(), 99, 1),
            OfferingSelection::Mismatch
        );
    }

    #[test]
    fn test_no_offerings_always_mismatch() {
        assert_eq!(
            validate_offering_selection(&[], 10, 1),
            OfferingSelection::Mismatch
        );
    }
}
