use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码
//
// 约定：0 表示成功；40xxx 请求/业务错误；401xx 认证；403xx 权限；
// 404xx 资源不存在；429xx 频率限制；500xx 服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 请求与业务规则
    BadRequest = 40000,
    ValidationFailed = 40001,
    RegisterFailed = 40002,
    UserAlreadyExists = 40003,
    UserEmailAlreadyExists = 40004,
    UserNameInvalid = 40005,
    UserEmailInvalid = 40006,
    UserPasswordInvalid = 40007,
    // 雇佣请求
    HireOfferingMismatch = 40010,
    HireDuplicateActive = 40011,
    HireNotPending = 40012,
    // 提交与评分
    SubmissionAlreadyExists = 40020,
    SubmissionAlreadyGraded = 40021,
    GradeInvalid = 40022,
    // 评价
    ReviewAlreadyExists = 40030,
    RatingInvalid = 40031,

    // 认证
    AuthFailed = 40100,
    Unauthorized = 40101,

    // 权限
    Forbidden = 40300,

    // 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    TutorNotFound = 40402,
    SubjectNotFound = 40403,
    AcademicLevelNotFound = 40404,
    AssignmentNotFound = 40405,
    SubmissionNotFound = 40406,
    HireRequestNotFound = 40407,

    // 频率限制
    RateLimitExceeded = 42900,

    // 服务端
    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::HireOfferingMismatch as i32, 40010);
        assert_eq!(ErrorCode::HireDuplicateActive as i32, 40011);
        assert_eq!(ErrorCode::ReviewAlreadyExists as i32, 40030);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
