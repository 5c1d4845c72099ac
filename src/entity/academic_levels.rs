//! 学段实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tutor_offerings::Entity")]
    TutorOfferings,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_academic_level(self) -> crate::models::catalog::entities::AcademicLevel {
        crate::models::catalog::entities::AcademicLevel {
            id: self.id,
            name: self.name,
        }
    }
}
