use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::hires::entities::HireStatus;

/// 发起雇佣请求（学生）
///
/// 字段名与客户端调用保持一致：tutor_user_id 指被雇佣导师的用户 ID。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub struct CreateHireRequest {
    pub tutor_user_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
    pub notes: Option<String>,
    pub payment_type: Option<String>,
}

/// 雇佣请求列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub struct HireListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<HireStatus>,
    pub tutor_id: Option<i64>,
    pub student_id: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct HireListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<HireStatus>,
    pub tutor_id: Option<i64>,
    pub student_id: Option<i64>,
}
