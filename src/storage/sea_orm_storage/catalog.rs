//! 参考数据存储操作（科目与学段）

use super::SeaOrmStorage;
use crate::entity::academic_levels::{
    ActiveModel as AcademicLevelActiveModel, Column as AcademicLevelColumn,
    Entity as AcademicLevels,
};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as Subjects,
};
use crate::errors::{Result, TutorMarketError};
use crate::models::catalog::entities::{AcademicLevel, Subject};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let results = Subjects::find()
            .order_by_asc(SubjectColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 列出全部学段
    pub async fn list_academic_levels_impl(&self) -> Result<Vec<AcademicLevel>> {
        let results = AcademicLevels::find()
            .order_by_asc(AcademicLevelColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询学段失败: {e}")))?;

        Ok(results
            .into_iter()
            .map(|m| m.into_academic_level())
            .collect())
    }

    /// 创建科目
    pub async fn create_subject_impl(&self, name: &str) -> Result<Subject> {
        let model = SubjectActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 创建学段
    pub async fn create_academic_level_impl(&self, name: &str) -> Result<AcademicLevel> {
        let model = AcademicLevelActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("创建学段失败: {e}")))?;

        Ok(result.into_academic_level())
    }

    /// 科目总数
    pub async fn count_subjects_impl(&self) -> Result<u64> {
        Subjects::find()
            .count(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询科目总数失败: {e}")))
    }
}
