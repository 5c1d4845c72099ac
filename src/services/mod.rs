pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod hires;
pub mod reviews;
pub mod submissions;
pub mod tutors;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use hires::HireService;
pub use reviews::ReviewService;
pub use submissions::SubmissionService;
pub use tutors::TutorService;
pub use users::UserService;
