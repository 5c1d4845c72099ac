pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod hires;
pub mod reviews;
pub mod submissions;
pub mod tutors;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 程序启动时间，用于系统运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
