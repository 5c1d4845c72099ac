use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::hires::entities::HireRequest;
use crate::models::users::responses::UserSummary;

// 列表项：请求 + 双方展示信息 + 科目/学段名
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub struct HireListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub hire: HireRequest,
    pub tutor: Option<UserSummary>,
    pub student: Option<UserSummary>,
    pub subject_name: Option<String>,
    pub academic_level_name: Option<String>,
}

// 雇佣请求列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub struct HireListResponse {
    pub items: Vec<HireListItem>,
    pub pagination: PaginationInfo,
}

// 导师维度的雇佣统计，始终从存储层重新计算
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub struct HiringStatistics {
    pub total_requests: i64,
    pub pending: i64,
    pub accepted: i64,
    pub rejected: i64,
    // accepted / (accepted + rejected)，无已处理请求时为 0
    pub acceptance_rate: f64,
}

impl HiringStatistics {
    pub fn from_counts(pending: i64, accepted: i64, rejected: i64) -> Self {
        let decided = accepted + rejected;
        let acceptance_rate = if decided > 0 {
            accepted as f64 / decided as f64
        } else {
            0.0
        };
        Self {
            total_requests: pending + decided,
            pending,
            accepted,
            rejected,
            acceptance_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_rate() {
        let stats = HiringStatistics::from_counts(2, 3, 1);
        assert_eq!(stats.total_requests, 6);
        assert!((stats.acceptance_rate - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_acceptance_rate_with_no_decided_requests() {
        let stats = HiringStatistics::from_counts(4, 0, 0);
        assert_eq!(stats.total_requests, 4);
        assert_eq!(stats.acceptance_rate, 0.0);
    }
}
