//! 作业存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TutorMarketError};
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::CreateAssignmentRequest,
        responses::AssignmentRow,
    },
    submissions::entities::Submission,
    users::responses::UserSummary,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        tutor_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tutor_id: Set(tutor_id),
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            academic_level_id: Set(req.academic_level_id),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.map(|dt| dt.timestamp())),
            file_ref: Set(req.file_ref),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出归属范围内的作业行
    ///
    /// 返回作业 + 双方展示信息 + 对应学生的提交。状态派生和
    /// 搜索/状态过滤属于业务层，这里只做归属过滤和取数。
    pub async fn list_assignment_rows_impl(
        &self,
        tutor_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Vec<AssignmentRow>> {
        let mut select = Assignments::find();

        if let Some(tutor_id) = tutor_id {
            select = select.filter(Column::TutorId.eq(tutor_id));
        }

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let assignments: Vec<Assignment> = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询双方用户
        let mut user_ids: Vec<i64> = assignments
            .iter()
            .flat_map(|a| [a.tutor_id, a.student_id])
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

        // 批量查询提交，按 (assignment_id, student_id) 匹配
        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
        let submissions = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询提交失败: {e}")))?;

        let mut submission_map: HashMap<(i64, i64), Submission> = HashMap::new();
        for submission in submissions {
            let sub = submission.into_submission();
            submission_map
                .entry((sub.assignment_id, sub.student_id))
                .or_insert(sub);
        }

        Ok(assignments
            .into_iter()
            .map(|assignment| AssignmentRow {
                tutor: user_map.get(&assignment.tutor_id).cloned(),
                student: user_map.get(&assignment.student_id).cloned(),
                submission: submission_map
                    .get(&(assignment.id, assignment.student_id))
                    .cloned(),
                assignment,
            })
            .collect())
    }
}
