pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod hires;
pub mod reviews;
pub mod submissions;
pub mod tutors;
pub mod users;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use hires::configure_hires_routes;
pub use reviews::configure_reviews_routes;
pub use submissions::configure_submissions_routes;
pub use tutors::configure_tutors_routes;
pub use users::configure_user_routes;
