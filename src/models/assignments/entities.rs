use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业业务模型
//
// 由导师布置给某个学生；学生对同一作业至多一次提交。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    // 布置作业的导师 ID
    pub tutor_id: i64,
    // 接收作业的学生 ID
    pub student_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 截止时间，可以不设
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    // 附件引用（外部文件服务的不透明 token）
    pub file_ref: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
