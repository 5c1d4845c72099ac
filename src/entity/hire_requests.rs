//! 雇佣请求实体

use sea_orm::entity::prelude::*;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hire_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub payment_type: Option<String>,
    pub requested_at: i64,
    pub responded_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TutorId",
        to = "super::users::Column::Id"
    )]
    Tutor,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::academic_levels::Entity",
        from = "Column::AcademicLevelId",
        to = "super::academic_levels::Column::Id"
    )]
    AcademicLevel,
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_hire_request(self) -> crate::models::hires::entities::HireRequest {
        use crate::models::hires::entities::{HireRequest, HireStatus};
        use chrono::{DateTime, Utc};

        HireRequest {
            id: self.id,
            tutor_id: self.tutor_id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            academic_level_id: self.academic_level_id,
            status: HireStatus::from_str(&self.status).unwrap_or(HireStatus::Pending),
            notes: self.notes,
            payment_type: self.payment_type,
            requested_at: DateTime::<Utc>::from_timestamp(self.requested_at, 0)
                .unwrap_or_default(),
            responded_at: self
                .responded_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        }
    }
}
