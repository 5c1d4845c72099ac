//! 导师评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tutor_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub review_text: String,
    pub created_at: i64,
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
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_tutor_review(self) -> crate::models::reviews::entities::TutorReview {
        use chrono::{DateTime, Utc};

        crate::models::reviews::entities::TutorReview {
            id: self.id,
            tutor_id: self.tutor_id,
            student_id: self.student_id,
            rating: self.rating,
            review_text: self.review_text,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
