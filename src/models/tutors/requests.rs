use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::utils::filter::ListFilter;

/// 导师列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(flatten)]
    #[ts(skip)]
    pub filter: ListFilter,
}

/// 导师详情查询参数
///
/// student_id 提供时，详情会带上该学生与导师的雇佣状态。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorDetailParams {
    pub student_id: Option<i64>,
}

/// 更新导师资料请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct UpdateTutorProfileRequest {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate: Option<f64>,
}

/// 单个（科目，学段）组合
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct OfferingPair {
    pub subject_id: i64,
    pub academic_level_id: i64,
}

/// 整体替换导师开设组合请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct UpdateOfferingsRequest {
    pub offerings: Vec<OfferingPair>,
}
