use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::submissions::entities::Submission;
use crate::models::users::responses::UserSummary;

// 列表项：提交 + 作业标题 + 学生展示信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub assignment_title: String,
    pub student: Option<UserSummary>,
}

// 提交列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}
