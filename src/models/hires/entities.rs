use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 雇佣请求状态
//
// 状态机（按学生-导师-科目-学段组合）：
// 无请求 -> pending -> accepted（终态）
//                   -> rejected（可重试：学生重新提交产生新的 pending 请求）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub enum HireStatus {
    Pending,  // 等待导师处理
    Accepted, // 导师已接受
    Rejected, // 导师已拒绝
}

impl HireStatus {
    pub const PENDING: &'static str = "pending";
    pub const ACCEPTED: &'static str = "accepted";
    pub const REJECTED: &'static str = "rejected";

    /// 活跃状态：占用 (student, tutor, subject, level) 组合的唯一名额
    pub fn is_active(&self) -> bool {
        matches!(self, HireStatus::Pending | HireStatus::Accepted)
    }

    /// 导师是否还能对该请求作出接受/拒绝
    pub fn can_respond(&self) -> bool {
        matches!(self, HireStatus::Pending)
    }

    /// 学生是否可以就同一组合重新发起请求
    pub fn allows_resubmit(&self) -> bool {
        matches!(self, HireStatus::Rejected)
    }
}

impl<'de> Deserialize<'de> for HireStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            HireStatus::PENDING => Ok(HireStatus::Pending),
            HireStatus::ACCEPTED => Ok(HireStatus::Accepted),
            HireStatus::REJECTED => Ok(HireStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的雇佣请求状态: '{s}'. 支持的状态: pending, accepted, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for HireStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HireStatus::Pending => write!(f, "{}", HireStatus::PENDING),
            HireStatus::Accepted => write!(f, "{}", HireStatus::ACCEPTED),
            HireStatus::Rejected => write!(f, "{}", HireStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for HireStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(HireStatus::Pending),
            "accepted" => Ok(HireStatus::Accepted),
            "rejected" => Ok(HireStatus::Rejected),
            _ => Err(format!("Invalid hire status: {s}")),
        }
    }
}

// 雇佣请求业务模型
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hire.ts")]
pub struct HireRequest {
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub academic_level_id: i64,
    pub status: HireStatus,
    pub notes: Option<String>,
    pub payment_type: Option<String>,
    pub requested_at: chrono::DateTime<chrono::Utc>,
    // 导师接受/拒绝的时间
    pub responded_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_active_and_respondable() {
        assert!(HireStatus::Pending.is_active());
        assert!(HireStatus::Pending.can_respond());
        assert!(!HireStatus::Pending.allows_resubmit());
    }

    #[test]
    fn test_accepted_is_terminal() {
        assert!(HireStatus::Accepted.is_active());
        assert!(!HireStatus::Accepted.can_respond());
        assert!(!HireStatus::Accepted.allows_resubmit());
    }

    #[test]
    fn test_rejected_allows_retry() {
        assert!(!HireStatus::Rejected.is_active());
        assert!(!HireStatus::Rejected.can_respond());
        assert!(HireStatus::Rejected.allows_resubmit());
    }

    #[test]
    fn test_status_round_trip() {
        use std::str::FromStr;
        for status in ["pending", "accepted", "rejected"] {
            let parsed = HireStatus::from_str(status).expect("status should parse");
            assert_eq!(parsed.to_string(), status);
        }
        assert!(HireStatus::from_str("cancelled").is_err());
    }
}
