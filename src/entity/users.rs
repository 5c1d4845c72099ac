//! 用户实体

use sea_orm::entity::prelude::*;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

// 作业/请求/评价从各自实体侧 belongs_to 用户，方向在查询处显式给出
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::tutor_profiles::Entity")]
    TutorProfile,
}

impl Related<super::tutor_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TutorProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            // 角色和状态列只由本服务写入，合法值以外按最低权限处理
            role: UserRole::from_str(&self.role).unwrap_or(UserRole::Student),
            status: UserStatus::from_str(&self.status).unwrap_or(UserStatus::Inactive),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            last_login: self
                .last_login
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
