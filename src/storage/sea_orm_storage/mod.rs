//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod catalog;
mod hires;
mod reviews;
mod submissions;
mod tutors;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TutorMarketError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TutorMarketError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TutorMarketError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TutorMarketError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TutorMarketError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TutorMarketError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 参考数据模块
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn list_academic_levels(&self) -> Result<Vec<AcademicLevel>> {
        self.list_academic_levels_impl().await
    }

    async fn create_subject(&self, name: &str) -> Result<Subject> {
        self.create_subject_impl(name).await
    }

    async fn create_academic_level(&self, name: &str) -> Result<AcademicLevel> {
        self.create_academic_level_impl(name).await
    }

    async fn count_subjects(&self) -> Result<u64> {
        self.count_subjects_impl().await
    }

    // 导师模块
    async fn list_tutor_items(&self) -> Result<Vec<TutorListItem>> {
        self.list_tutor_items_impl().await
    }

    async fn get_tutor_detail(
        &self,
        tutor_id: i64,
        student_id: Option<i64>,
    ) -> Result<Option<TutorDetailResponse>> {
        self.get_tutor_detail_impl(tutor_id, student_id).await
    }

    async fn get_tutor_offerings(&self, tutor_id: i64) -> Result<Vec<TutorOffering>> {
        self.get_tutor_offerings_impl(tutor_id).await
    }

    async fn set_tutor_offerings(
        &self,
        tutor_id: i64,
        offerings: Vec<OfferingPair>,
    ) -> Result<Vec<TutorOffering>> {
        self.set_tutor_offerings_impl(tutor_id, offerings).await
    }

    async fn update_tutor_profile(
        &self,
        tutor_id: i64,
        update: UpdateTutorProfileRequest,
    ) -> Result<Option<TutorProfile>> {
        self.update_tutor_profile_impl(tutor_id, update).await
    }

    // 雇佣请求模块
    async fn create_hire_request(
        &self,
        student_id: i64,
        request: CreateHireRequest,
    ) -> Result<HireRequest> {
        self.create_hire_request_impl(student_id, request).await
    }

    async fn get_hire_request_by_id(&self, id: i64) -> Result<Option<HireRequest>> {
        self.get_hire_request_by_id_impl(id).await
    }

    async fn find_active_hire_request(
        &self,
        student_id: i64,
        tutor_id: i64,
        subject_id: i64,
        academic_level_id: i64,
    ) -> Result<Option<HireRequest>> {
        self.find_active_hire_request_impl(student_id, tutor_id, subject_id, academic_level_id)
            .await
    }

    async fn find_latest_hire_request(
        &self,
        student_id: i64,
        tutor_id: i64,
    ) -> Result<Option<HireRequest>> {
        self.find_latest_hire_request_impl(student_id, tutor_id)
            .await
    }

    async fn list_hire_requests_with_pagination(
        &self,
        query: HireListQuery,
    ) -> Result<HireListResponse> {
        self.list_hire_requests_with_pagination_impl(query).await
    }

    async fn respond_hire_request(
        &self,
        id: i64,
        status: HireStatus,
    ) -> Result<Option<HireRequest>> {
        self.respond_hire_request_impl(id, status).await
    }

    async fn hire_statistics(&self, tutor_id: i64) -> Result<HiringStatistics> {
        self.hire_statistics_impl(tutor_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        tutor_id: i64,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(tutor_id, request).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignment_rows(
        &self,
        tutor_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Vec<AssignmentRow>> {
        self.list_assignment_rows_impl(tutor_id, student_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        is_late: bool,
        request: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(assignment_id, student_id, is_late, request)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_for_assignment(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_for_assignment_impl(assignment_id, student_id)
            .await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn grade_submission(
        &self,
        id: i64,
        request: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, request).await
    }

    // 评价模块
    async fn create_review(
        &self,
        tutor_id: i64,
        student_id: i64,
        request: CreateReviewRequest,
    ) -> Result<TutorReview> {
        self.create_review_impl(tutor_id, student_id, request).await
    }

    async fn get_review_by_student_and_tutor(
        &self,
        student_id: i64,
        tutor_id: i64,
    ) -> Result<Option<TutorReview>> {
        self.get_review_by_student_and_tutor_impl(student_id, tutor_id)
            .await
    }

    async fn list_reviews_with_pagination(
        &self,
        tutor_id: i64,
        page: i64,
        size: i64,
    ) -> Result<ReviewListResponse> {
        self.list_reviews_with_pagination_impl(tutor_id, page, size)
            .await
    }

    async fn review_statistics(&self, tutor_id: i64) -> Result<ReviewStatistics> {
        self.review_statistics_impl(tutor_id).await
    }
}
