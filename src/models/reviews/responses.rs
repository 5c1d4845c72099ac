use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::reviews::entities::TutorReview;
use crate::models::users::responses::UserSummary;

// 评价列表的分页信息，字段名与客户端约定保持一致
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewPagination {
    pub page: i64,
    pub page_size: i64,
    pub total_reviews: i64,
    pub total_pages: i64,
}

// 列表项：评价 + 评价者展示信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub review: TutorReview,
    pub student: Option<UserSummary>,
}

// 评价列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewListItem>,
    pub pagination: ReviewPagination,
}
