//! 导师评价存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::tutor_reviews::{ActiveModel, Column, Entity as TutorReviews};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, TutorMarketError};
use crate::models::{
    reviews::{
        entities::TutorReview,
        requests::CreateReviewRequest,
        responses::{ReviewListItem, ReviewListResponse, ReviewPagination},
    },
    tutors::responses::ReviewStatistics,
    users::responses::UserSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建评价
    pub async fn create_review_impl(
        &self,
        tutor_id: i64,
        student_id: i64,
        req: CreateReviewRequest,
    ) -> Result<TutorReview> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tutor_id: Set(tutor_id),
            student_id: Set(student_id),
            rating: Set(req.rating),
            review_text: Set(req.review_text),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("创建评价失败: {e}")))?;

        Ok(result.into_tutor_review())
    }

    /// 学生对某导师的评价（唯一约束：至多一条）
    pub async fn get_review_by_student_and_tutor_impl(
        &self,
        student_id: i64,
        tutor_id: i64,
    ) -> Result<Option<TutorReview>> {
        let result = TutorReviews::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TutorId.eq(tutor_id))
            .one(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_tutor_review()))
    }

    /// 分页列出导师的评价
    pub async fn list_reviews_with_pagination_impl(
        &self,
        tutor_id: i64,
        page: i64,
        size: i64,
    ) -> Result<ReviewListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = TutorReviews::find()
            .filter(Column::TutorId.eq(tutor_id))
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);

        let total = paginator.num_items().await.map_err(|e| {
            TutorMarketError::database_operation(format!("查询评价总数失败: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            TutorMarketError::database_operation(format!("查询评价页数失败: {e}"))
        })?;

        let reviews: Vec<TutorReview> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| {
                TutorMarketError::database_operation(format!("查询评价列表失败: {e}"))
            })?
            .into_iter()
            .map(|m| m.into_tutor_review())
            .collect();

        // 批量查询评价者展示信息
        let student_ids: Vec<i64> = reviews
            .iter()
            .map(|r| r.student_id)
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

        let items = reviews
            .into_iter()
            .map(|review| ReviewListItem {
                student: student_map.get(&review.student_id).cloned(),
                review,
            })
            .collect();

        Ok(ReviewListResponse {
            reviews: items,
            pagination: ReviewPagination {
                page: page as i64,
                page_size: size as i64,
                total_reviews: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 导师评价统计
    pub async fn review_statistics_impl(&self, tutor_id: i64) -> Result<ReviewStatistics> {
        let reviews = TutorReviews::find()
            .filter(Column::TutorId.eq(tutor_id))
            .all(&self.db)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("查询评价统计失败: {e}")))?;

        let total_reviews = reviews.len() as i64;
        let average_rating = if total_reviews > 0 {
            Some(reviews.iter().map(|r| r.rating as f64).sum::<f64>() / total_reviews as f64)
        } else {
            None
        };

        Ok(ReviewStatistics {
            total_reviews,
            average_rating,
        })
    }
}
