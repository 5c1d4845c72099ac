//! 雇佣请求存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::hire_requests::{ActiveModel, Column, Entity as HireRequests};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TutorMarketError};
use crate::models::{
    PaginationInfo,
    hires::{
        entities::{HireRequest, HireStatus},
        requests::{CreateHireRequest, HireListQuery},
        responses::{HireListItem, HireListResponse, HiringStatistics},
    },
    users::responses::UserSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建雇佣请求（初始状态 pending）
    pub async fn create_hire_request_impl(
        &self,
        student_id: i64,
        req: CreateHireRequest,
    ) -> Result<HireRequest> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tutor_id: Set(req.tutor_user_id),
            student_id: Set(student_id),
            subject_id: Set(req.subject_id),
            academic_level_id: Set(req.academic_level_id),
            status: Set(HireStatus::Pending.to_string()),
            notes: Set(req.notes),
            payment_type: Set(req.payment_type),
            requested_at: Set(now),
            responded_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("创建雇佣请求失败: {e}")))?;

        Ok(result.into_hire_request())
    }

    /// 通过 ID 获取雇佣请求
    pub async fn get_hire_request_by_id_impl(&self, id: i64) -> Result<Option<HireRequest>> {
        let result = HireRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询雇佣请求失败: {e}")))?;

        Ok(result.map(|m| m.into_hire_request()))
    }

    /// 查找组合下的活跃请求（pending/accepted）
    ///
    /// 唯一性约束：同一 (student, tutor, subject, level) 至多一个活跃请求。
    pub async fn find_active_hire_request_impl(
        &self,
        student_id: i64,
        tutor_id: i64,
        subject_id: i64,
        academic_level_id: i64,
    ) -> Result<Option<HireRequest>> {
        let result = HireRequests::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TutorId.eq(tutor_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::AcademicLevelId.eq(academic_level_id))
            .filter(
                Column::Status.is_in([
                    HireStatus::Pending.to_string(),
                    HireStatus::Accepted.to_string(),
                ]),
            )
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询活跃请求失败: {e}")))?;

        Ok(result.map(|m| m.into_hire_request()))
    }

    /// 学生与导师之间最近一次请求（任意科目/学段）
    pub async fn find_latest_hire_request_impl(
        &self,
        student_id: i64,
        tutor_id: i64,
    ) -> Result<Option<HireRequest>> {
        let result = HireRequests::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TutorId.eq(tutor_id))
            .order_by_desc(Column::RequestedAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询最近请求失败: {e}")))?;

        Ok(result.map(|m| m.into_hire_request()))
    }

    /// 分页列出雇佣请求
    pub async fn list_hire_requests_with_pagination_impl(
        &self,
        query: HireListQuery,
    ) -> Result<HireListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = HireRequests::find();

        if let Some(tutor_id) = query.tutor_id {
            select = select.filter(Column::TutorId.eq(tutor_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::RequestedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TutorMarketError::database_operation(format!("查询请求总数失败: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            TutorMarketError::database_operation(format!("查询请求页数失败: {e}"))
        })?;

        let requests: Vec<HireRequest> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询请求列表失败: {e}"))
            })?
            .into_iter()
            .map(|m| m.into_hire_request())
            .collect();

        // 批量查询双方用户与目录名称
        let mut user_ids: Vec<i64> = requests
            .iter()
            .flat_map(|r| [r.tutor_id, r.student_id])
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        user_ids.sort_unstable();

        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询用户失败: {e}")))?;
        let user_map: HashMap<i64, UserSummary> = users
            .into_iter()
            .map(|m| {
                let user = m.into_user();
                (user.id, UserSummary::from(&user))
            })
            .collect();

        let (subject_names, level_names) = self.catalog_name_maps().await?;

        let items = requests
            .into_iter()
            .map(|hire| HireListItem {
                tutor: user_map.get(&hire.tutor_id).cloned(),
                student: user_map.get(&hire.student_id).cloned(),
                subject_name: subject_names.get(&hire.subject_id).cloned(),
                academic_level_name: level_names.get(&hire.academic_level_id).cloned(),
                hire,
            })
            .collect();

        Ok(HireListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 导师接受/拒绝请求，写入处理时间
    pub async fn respond_hire_request_impl(
        &self,
        id: i64,
        status: HireStatus,
    ) -> Result<Option<HireRequest>> {
        let existing = self.get_hire_request_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            responded_at: Set(Some(now)),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("更新请求状态失败: {e}")))?;

        self.get_hire_request_by_id_impl(id).await
    }

    /// 导师维度雇佣统计，每次从请求表重新计算
    pub async fn hire_statistics_impl(&self, tutor_id: i64) -> Result<HiringStatistics> {
        let mut counts: HashMap<String, i64> = HashMap::new();

        let requests = HireRequests::find()
            .filter(Column::TutorId.eq(tutor_id))
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询雇佣统计失败: {e}")))?;

        for request in requests {
            *counts.entry(request.status).or_insert(0) += 1;
        }

        Ok(HiringStatistics::from_counts(
            counts.get(HireStatus::PENDING).copied().unwrap_or(0),
            counts.get(HireStatus::ACCEPTED).copied().unwrap_or(0),
            counts.get(HireStatus::REJECTED).copied().unwrap_or(0),
        ))
    }
}
