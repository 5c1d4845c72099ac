use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目（参考数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

// 学段（参考数据，如 GCSE / A-Level）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct AcademicLevel {
    pub id: i64,
    pub name: String,
}
