use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 导师资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorProfile {
    pub user_id: i64,
    pub headline: Option<String>,
    pub bio: Option<String>,
    // 每小时费率（货币单位由部署方约定）
    pub hourly_rate: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 导师开设的（科目，学段）组合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorOffering {
    pub id: i64,
    pub tutor_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
}

impl TutorOffering {
    /// 该组合是否与所选科目/学段匹配
    pub fn matches(&self, subject_id: i64, academic_level_id: i64) -> bool {
        self.subject_id == subject_id && self.academic_level_id == academic_level_id
    }
}

// 带名称的组合，用于详情展示
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct OfferingDetail {
    pub subject_id: i64,
    pub subject_name: String,
    pub academic_level_id: i64,
    pub academic_level_name: String,
}
