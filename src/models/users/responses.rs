use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::users::entities::User;

// 用户列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

// 用户摘要（嵌入到其他响应中：导师、学生的展示信息）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name.clone(),
        }
    }
}
