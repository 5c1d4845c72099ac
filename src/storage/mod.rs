use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::CreateAssignmentRequest,
        responses::AssignmentRow,
    },
    catalog::entities::{AcademicLevel, Subject},
    hires::{
        entities::{HireRequest, HireStatus},
        requests::{CreateHireRequest, HireListQuery},
        responses::{HireListResponse, HiringStatistics},
    },
    reviews::{
        entities::TutorReview,
        requests::CreateReviewRequest,
        responses::ReviewListResponse,
    },
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    tutors::{
        entities::{TutorOffering, TutorProfile},
        requests::{OfferingPair, UpdateTutorProfileRequest},
        responses::{ReviewStatistics, TutorDetailResponse, TutorListItem},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已在业务层完成哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数（用于启动时判断是否需要初始化管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 参考数据方法
    // 列出科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 列出学段
    async fn list_academic_levels(&self) -> Result<Vec<AcademicLevel>>;
    // 创建科目
    async fn create_subject(&self, name: &str) -> Result<Subject>;
    // 创建学段
    async fn create_academic_level(&self, name: &str) -> Result<AcademicLevel>;
    // 科目总数（用于启动时判断是否需要初始化目录）
    async fn count_subjects(&self) -> Result<u64>;

    /// 导师方法
    // 列出全部导师（含资料、开设组合、评价统计），搜索过滤在业务层完成
    async fn list_tutor_items(&self) -> Result<Vec<TutorListItem>>;
    // 导师详情（含雇佣统计；student_id 提供时带该学生的雇佣状态）
    async fn get_tutor_detail(
        &self,
        tutor_id: i64,
        student_id: Option<i64>,
    ) -> Result<Option<TutorDetailResponse>>;
    // 导师开设组合
    async fn get_tutor_offerings(&self, tutor_id: i64) -> Result<Vec<TutorOffering>>;
    // 整体替换导师开设组合
    async fn set_tutor_offerings(
        &self,
        tutor_id: i64,
        offerings: Vec<OfferingPair>,
    ) -> Result<Vec<TutorOffering>>;
    // 更新导师资料
    async fn update_tutor_profile(
        &self,
        tutor_id: i64,
        update: UpdateTutorProfileRequest,
    ) -> Result<Option<TutorProfile>>;

    /// 雇佣请求方法
    // 创建请求（唯一性与开设组合校验已在业务层完成）
    async fn create_hire_request(
        &self,
        student_id: i64,
        request: CreateHireRequest,
    ) -> Result<HireRequest>;
    // 通过ID获取请求
    async fn get_hire_request_by_id(&self, id: i64) -> Result<Option<HireRequest>>;
    // 查找组合下的活跃请求（pending/accepted）
    async fn find_active_hire_request(
        &self,
        student_id: i64,
        tutor_id: i64,
        subject_id: i64,
        academic_level_id: i64,
    ) -> Result<Option<HireRequest>>;
    // 查找学生与导师之间最近一次请求（任意科目/学段）
    async fn find_latest_hire_request(
        &self,
        student_id: i64,
        tutor_id: i64,
    ) -> Result<Option<HireRequest>>;
    // 列出请求
    async fn list_hire_requests_with_pagination(
        &self,
        query: HireListQuery,
    ) -> Result<HireListResponse>;
    // 导师接受/拒绝请求
    async fn respond_hire_request(&self, id: i64, status: HireStatus)
    -> Result<Option<HireRequest>>;
    // 导师维度雇佣统计
    async fn hire_statistics(&self, tutor_id: i64) -> Result<HiringStatistics>;

    /// 作业方法
    // 创建作业
    async fn create_assignment(
        &self,
        tutor_id: i64,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出归属范围内的作业行（含双方展示信息和提交），状态派生与过滤在业务层完成
    async fn list_assignment_rows(
        &self,
        tutor_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Vec<AssignmentRow>>;

    /// 提交方法
    // 创建提交
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        is_late: bool,
        request: CreateSubmissionRequest,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取学生对某作业的提交
    async fn get_submission_for_assignment(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 评分（submitted -> graded，写入分数和反馈）
    async fn grade_submission(
        &self,
        id: i64,
        request: GradeSubmissionRequest,
    ) -> Result<Option<Submission>>;

    /// 评价方法
    // 创建评价
    async fn create_review(
        &self,
        tutor_id: i64,
        student_id: i64,
        request: CreateReviewRequest,
    ) -> Result<TutorReview>;
    // 获取学生对某导师的评价
    async fn get_review_by_student_and_tutor(
        &self,
        student_id: i64,
        tutor_id: i64,
    ) -> Result<Option<TutorReview>>;
    // 分页列出导师的评价
    async fn list_reviews_with_pagination(
        &self,
        tutor_id: i64,
        page: i64,
        size: i64,
    ) -> Result<ReviewListResponse>;
    // 导师评价统计
    async fn review_statistics(&self, tutor_id: i64) -> Result<ReviewStatistics>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
