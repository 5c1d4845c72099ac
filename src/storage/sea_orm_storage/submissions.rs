//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TutorMarketError};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListQuery},
        responses::{SubmissionListItem, SubmissionListResponse},
    },
    users::responses::UserSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建提交
    pub async fn create_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        is_late: bool,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            submitted_at: Set(now),
            is_late: Set(is_late),
            status: Set(SubmissionStatus::Submitted.to_string()),
            grade: Set(None),
            feedback: Set(None),
            file_ref: Set(req.file_ref),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 学生对某作业的提交（业务规则：至多一条）
    pub async fn get_submission_for_assignment_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 分页列出提交
    ///
    /// tutor_id 过滤经由作业归属完成：先取该导师的作业 ID，再过滤提交。
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(tutor_id) = query.tutor_id {
            let assignment_ids: Vec<i64> = Assignments::find()
                .filter(AssignmentColumn::TutorId.eq(tutor_id))
                .all(&self.db)
                .await
                .map_err(|e| {
                    TutorMarketError::database_operation(format!("查询导师作业失败: {e}"))
                })?
                .into_iter()
                .map(|m| m.id)
                .collect();
            select = select.filter(Column::AssignmentId.is_in(assignment_ids));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TutorMarketError::database_operation(format!("查询提交总数失败: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            TutorMarketError::database_operation(format!("查询提交页数失败: {e}"))
        })?;

        let submissions: Vec<Submission> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询提交列表失败: {e}"))
            })?
            .into_iter()
            .map(|m| m.into_submission())
            .collect();

        // 批量查询作业标题
        let assignment_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.assignment_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        let assignments = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询作业失败: {e}")))?;
        let title_map: HashMap<i64, String> =
            assignments.into_iter().map(|m| (m.id, m.title)).collect();

        // 批量查询学生展示信息
        let student_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.student_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        let students = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询学生失败: {e}")))?;
        let student_map: HashMap<i64, UserSummary> = students
            .into_iter()
            .map(|m| {
                let user = m.into_user();
                (user.id, UserSummary::from(&user))
            })
            .collect();

        let items = submissions
            .into_iter()
            .map(|submission| SubmissionListItem {
                assignment_title: title_map
                    .get(&submission.assignment_id)
                    .cloned()
                    .unwrap_or_default(),
                student: student_map.get(&submission.student_id).cloned(),
                submission,
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 评分：submitted -> graded，写入分数和反馈
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        let existing = self.get_submission_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            status: Set(SubmissionStatus::Graded.to_string()),
            grade: Set(Some(req.grade)),
            ..Default::default()
        };

        if let Some(feedback) = req.feedback {
            model.feedback = Set(Some(feedback));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("评分失败: {e}")))?;

        self.get_submission_by_id_impl(id).await
    }
}
