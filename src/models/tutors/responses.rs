use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::hires::entities::HireStatus;
use crate::models::hires::responses::HiringStatistics;
use crate::models::tutors::entities::{OfferingDetail, TutorProfile};
use crate::models::users::responses::UserSummary;
use crate::utils::filter::Filterable;

// 评价统计
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct ReviewStatistics {
    pub total_reviews: i64,
    // 1-5 的平均分，无评价时为 None
    pub average_rating: Option<f64>,
}

// 列表项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorListItem {
    pub user: UserSummary,
    pub profile: TutorProfile,
    pub offerings: Vec<OfferingDetail>,
    pub review_statistics: ReviewStatistics,
}

impl Filterable for TutorListItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.user
                .display_name
                .as_deref()
                .unwrap_or(&self.user.username),
        ];
        if let Some(ref headline) = self.profile.headline {
            fields.push(headline.as_str());
        }
        fields.extend(self.offerings.iter().map(|o| o.subject_name.as_str()));
        fields
    }

    fn subject_ids(&self) -> Vec<i64> {
        self.offerings.iter().map(|o| o.subject_id).collect()
    }

    fn academic_level_ids(&self) -> Vec<i64> {
        self.offerings.iter().map(|o| o.academic_level_id).collect()
    }
}

// 导师列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorListResponse {
    pub items: Vec<TutorListItem>,
    pub pagination: PaginationInfo,
}

// 导师详情响应
//
// hiring_status 仅在请求方提供 student_id 时填充：该学生与导师之间
// 最近一次请求的状态，客户端据此渲染「请求中/已接受/重试」入口。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorDetailResponse {
    pub user: UserSummary,
    pub profile: TutorProfile,
    pub offerings: Vec<OfferingDetail>,
    pub hiring_statistics: HiringStatistics,
    pub review_statistics: ReviewStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiring_status: Option<HireStatus>,
}
