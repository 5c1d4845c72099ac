use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::submissions::entities::SubmissionStatus;

/// 提交作业请求（学生）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub file_ref: Option<String>,
}

/// 评分请求（导师）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub grade: f64,
    pub feedback: Option<String>,
}

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub assignment_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
    pub tutor_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}
