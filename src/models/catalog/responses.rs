use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::catalog::entities::{AcademicLevel, Subject};

// 参考数据响应：科目与学段一次性下发，客户端按学段组织科目选择
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CatalogResponse {
    pub subjects: Vec<Subject>,
    pub academic_levels: Vec<AcademicLevel>,
}
