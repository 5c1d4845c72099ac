use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 创建评价请求（学生）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct CreateReviewRequest {
    pub rating: i32,
    pub review_text: String,
}

/// 评价列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}
