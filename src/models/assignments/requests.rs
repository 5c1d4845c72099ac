use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::utils::filter::ListFilter;

/// 创建作业请求（导师）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub file_ref: Option<String>,
}

/// 作业列表查询参数（HTTP 请求）
///
/// status/subject_id/academic_level_id 支持哨兵值 "all"。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(flatten)]
    #[ts(skip)]
    pub filter: ListFilter,
    pub tutor_id: Option<i64>,
    pub student_id: Option<i64>,
}
