use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 导师评价
//
// 每个 (student, tutor) 组合至多一条，写入后不可修改。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct TutorReview {
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    // 1 到 5 的整数
    pub rating: i32,
    pub review_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
