use serde::Deserialize;
use ts_rs::TS;

/// 创建科目请求（管理端）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
}

/// 创建学段请求（管理端）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateAcademicLevelRequest {
    pub name: String,
}
