//! 预导入模块，方便使用

pub use super::academic_levels::{
    ActiveModel as AcademicLevelActiveModel, Entity as AcademicLevels, Model as AcademicLevelModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::hire_requests::{
    ActiveModel as HireRequestActiveModel, Entity as HireRequests, Model as HireRequestModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::tutor_offerings::{
    ActiveModel as TutorOfferingActiveModel, Entity as TutorOfferings, Model as TutorOfferingModel,
};
pub use super::tutor_profiles::{
    ActiveModel as TutorProfileActiveModel, Entity as TutorProfiles, Model as TutorProfileModel,
};
pub use super::tutor_reviews::{
    ActiveModel as TutorReviewActiveModel, Entity as TutorReviews, Model as TutorReviewModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
