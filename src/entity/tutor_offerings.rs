//! 导师开设组合实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tutor_offerings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tutor_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
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

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::academic_levels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_tutor_offering(self) -> crate::models::tutors::entities::TutorOffering {
        crate::models::tutors::entities::TutorOffering {
            id: self.id,
            tutor_id: self.tutor_id,
            subject_id: self.subject_id,
            academic_level_id: self.academic_level_id,
        }
    }
}
