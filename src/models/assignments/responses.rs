use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::assignments::status::AssignmentStatus;
use crate::models::common::pagination::PaginationInfo;
use crate::models::submissions::entities::Submission;
use crate::models::users::responses::UserSummary;
use crate::utils::filter::Filterable;

// 存储层返回的原始行；状态派生与过滤在业务层完成
#[derive(Debug, Clone)]
pub struct AssignmentRow {
    pub assignment: Assignment,
    pub tutor: Option<UserSummary>,
    pub student: Option<UserSummary>,
    pub submission: Option<Submission>,
}

// 列表项：作业 + 双方展示信息 + 派生状态
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub tutor: Option<UserSummary>,
    pub student: Option<UserSummary>,
    // 该学生对本作业的提交（至多一条）
    pub my_submission: Option<Submission>,
    pub status: AssignmentStatus,
    pub status_variant: String,
}

impl Filterable for AssignmentListItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.assignment.title.as_str()];
        if let Some(ref tutor) = self.tutor {
            fields.push(tutor.display_name.as_deref().unwrap_or(&tutor.username));
        }
        if let Some(ref student) = self.student {
            fields.push(student.display_name.as_deref().unwrap_or(&student.username));
        }
        fields
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.wire_label())
    }

    fn subject_ids(&self) -> Vec<i64> {
        vec![self.assignment.subject_id]
    }

    fn academic_level_ids(&self) -> Vec<i64> {
        vec![self.assignment.academic_level_id]
    }
}

// 作业列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}

// 作业详情响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub tutor: Option<UserSummary>,
    pub student: Option<UserSummary>,
    pub submission: Option<Submission>,
    pub status: AssignmentStatus,
    pub status_variant: String,
}
