//! 导师存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::tutor_offerings::{
    ActiveModel as TutorOfferingActiveModel, Column as TutorOfferingColumn,
    Entity as TutorOfferings,
};
use crate::entity::tutor_profiles::{
    ActiveModel as TutorProfileActiveModel, Column as TutorProfileColumn, Entity as TutorProfiles,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TutorMarketError};
use crate::models::tutors::{
    entities::{OfferingDetail, TutorOffering, TutorProfile},
    requests::{OfferingPair, UpdateTutorProfileRequest},
    responses::{TutorDetailResponse, TutorListItem},
};
use crate::models::users::entities::UserRole;
use crate::models::users::responses::UserSummary;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 科目/学段 ID 到名称的映射，用于组合展示
    pub(crate) async fn catalog_name_maps(
        &self,
    ) -> Result<(HashMap<i64, String>, HashMap<i64, String>)> {
        let subjects = self.list_subjects_impl().await?;
        let levels = self.list_academic_levels_impl().await?;

        let subject_names = subjects.into_iter().map(|s| (s.id, s.name)).collect();
        let level_names = levels.into_iter().map(|l| (l.id, l.name)).collect();
        Ok((subject_names, level_names))
    }

    /// 带名称的组合列表
    async fn offering_details(&self, tutor_id: i64) -> Result<Vec<OfferingDetail>> {
        let (subject_names, level_names) = self.catalog_name_maps().await?;
        let offerings = self.get_tutor_offerings_impl(tutor_id).await?;

        Ok(offerings
            .into_iter()
            .map(|o| OfferingDetail {
                subject_name: subject_names
                    .get(&o.subject_id)
                    .cloned()
                    .unwrap_or_default(),
                academic_level_name: level_names
                    .get(&o.academic_level_id)
                    .cloned()
                    .unwrap_or_default(),
                subject_id: o.subject_id,
                academic_level_id: o.academic_level_id,
            })
            .collect())
    }

    /// 列出全部导师（含资料、开设组合、评价统计）
    ///
    /// 搜索和分类过滤在业务层的过滤引擎中完成，这里只负责取数。
    pub async fn list_tutor_items_impl(&self) -> Result<Vec<TutorListItem>> {
        let tutors = Users::find()
            .filter(UserColumn::Role.eq(UserRole::TUTOR))
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询导师失败: {e}")))?;

        let (subject_names, level_names) = self.catalog_name_maps().await?;

        let tutor_ids: Vec<i64> = tutors.iter().map(|t| t.id).collect();
        let all_offerings = TutorOfferings::find()
            .filter(TutorOfferingColumn::TutorId.is_in(tutor_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询开设组合失败: {e}"))
            })?;

        let mut offering_map: HashMap<i64, Vec<OfferingDetail>> = HashMap::new();
        for offering in all_offerings {
            offering_map
                .entry(offering.tutor_id)
                .or_default()
                .push(OfferingDetail {
                    subject_name: subject_names
                        .get(&offering.subject_id)
                        .cloned()
                        .unwrap_or_default(),
                    academic_level_name: level_names
                        .get(&offering.academic_level_id)
                        .cloned()
                        .unwrap_or_default(),
                    subject_id: offering.subject_id,
                    academic_level_id: offering.academic_level_id,
                });
        }

        let profiles = TutorProfiles::find()
            .filter(TutorProfileColumn::UserId.is_in(tutor_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询导师资料失败: {e}"))
            })?;
        let mut profile_map: HashMap<i64, TutorProfile> = profiles
            .into_iter()
            .map(|p| (p.user_id, p.into_tutor_profile()))
            .collect();

        let mut items = Vec::with_capacity(tutors.len());
        for tutor in tutors {
            let review_statistics = self.review_statistics_impl(tutor.id).await?;
            let profile = profile_map
                .remove(&tutor.id)
                .unwrap_or_else(|| empty_profile(tutor.id));
            let user = tutor.into_user();
            items.push(TutorListItem {
                user: UserSummary::from(&user),
                profile,
                offerings: offering_map.remove(&user.id).unwrap_or_default(),
                review_statistics,
            });
        }

        Ok(items)
    }

    /// 导师详情
    ///
    /// 雇佣统计每次从请求表重新计算；student_id 提供时附带该学生与导师
    /// 最近一次请求的状态。
    pub async fn get_tutor_detail_impl(
        &self,
        tutor_id: i64,
        student_id: Option<i64>,
    ) -> Result<Option<TutorDetailResponse>> {
        let tutor = match self.get_user_by_id_impl(tutor_id).await? {
            Some(user) if user.role == UserRole::Tutor => user,
            _ => return Ok(None),
        };

        let profile = TutorProfiles::find_by_id(tutor_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询导师资料失败: {e}")))?
            .map(|m| m.into_tutor_profile())
            .unwrap_or_else(|| empty_profile(tutor_id));

        let offerings = self.offering_details(tutor_id).await?;
        let hiring_statistics = self.hire_statistics_impl(tutor_id).await?;
        let review_statistics = self.review_statistics_impl(tutor_id).await?;

        let hiring_status = match student_id {
            Some(student_id) => self
                .find_latest_hire_request_impl(student_id, tutor_id)
                .await?
                .map(|r| r.status),
            None => None,
        };

        Ok(Some(TutorDetailResponse {
            user: UserSummary::from(&tutor),
            profile,
            offerings,
            hiring_statistics,
            review_statistics,
            hiring_status,
        }))
    }

    /// 导师开设组合
    pub async fn get_tutor_offerings_impl(&self, tutor_id: i64) -> Result<Vec<TutorOffering>> {
        let results = TutorOfferings::find()
            .filter(TutorOfferingColumn::TutorId.eq(tutor_id))
            .order_by_asc(TutorOfferingColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询开设组合失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_tutor_offering()).collect())
    }

    /// 整体替换导师开设组合
    pub async fn set_tutor_offerings_impl(
        &self,
        tutor_id: i64,
        offerings: Vec<OfferingPair>,
    ) -> Result<Vec<TutorOffering>> {
        // 先删除旧组合
        TutorOfferings::delete_many()
            .filter(TutorOfferingColumn::TutorId.eq(tutor_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("删除旧开设组合失败: {e}"))
            })?;

        for pair in offerings {
            let model = TutorOfferingActiveModel {
                tutor_id: Set(tutor_id),
                subject_id: Set(pair.subject_id),
                academic_level_id: Set(pair.academic_level_id),
                ..Default::default()
            };

            model.insert(&self.db).await.map_err(|e| {
                TutorMarketError::database_operation(format!("创建开设组合失败: {e}"))
            })?;
        }

        self.get_tutor_offerings_impl(tutor_id).await
    }

    /// 更新导师资料（不存在时创建）
    pub async fn update_tutor_profile_impl(
        &self,
        tutor_id: i64,
        update: UpdateTutorProfileRequest,
    ) -> Result<Option<TutorProfile>> {
        let now = chrono::Utc::now().timestamp();

        let existing = TutorProfiles::find_by_id(tutor_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询导师资料失败: {e}"))
            })?;

        match existing {
            Some(_) => {
                let mut model = TutorProfileActiveModel {
                    user_id: Set(tutor_id),
                    updated_at: Set(now),
                    ..Default::default()
                };

                if let Some(headline) = update.headline {
                    model.headline = Set(Some(headline));
                }
                if let Some(bio) = update.bio {
                    model.bio = Set(Some(bio));
                }
                if let Some(hourly_rate) = update.hourly_rate {
                    model.hourly_rate = Set(Some(hourly_rate));
                }

                model.update(&self.db).await.map_err(|e| {
                    TutorMarketError::database_operation(format!("更新导师资料失败: {e}"))
                })?;
            }
            None => {
                let model = TutorProfileActiveModel {
                    user_id: Set(tutor_id),
                    headline: Set(update.headline),
                    bio: Set(update.bio),
                    hourly_rate: Set(update.hourly_rate),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                model.insert(&self.db).await.map_err(|e| {
                    TutorMarketError::database_operation(format!("创建导师资料失败: {e}"))
                })?;
            }
        }

        let result = TutorProfiles::find_by_id(tutor_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询导师资料失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_tutor_profile()))
    }
}

// 尚未填写资料的导师用空资料兜底
fn empty_profile(tutor_id: i64) -> TutorProfile {
    TutorProfile {
        user_id: tutor_id,
        headline: None,
        bio: None,
        hourly_rate: None,
        created_at: chrono::DateTime::<chrono::Utc>::default(),
        updated_at: chrono::DateTime::<chrono::Utc>::default(),
    }
}
