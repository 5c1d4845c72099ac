//! 作业展示状态派生
//!
//! 展示状态不落库，统一从作业记录和该学生的提交集合派生。
//! 所有视图（管理端、学生端、家长端、导师主页）都走这一个实现。

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;

/// 「即将截止」窗口：距截止不足 24 小时
pub const DUE_SOON_WINDOW_HOURS: i64 = 24;

// 作业展示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    // 已有提交且完成评分
    Graded,
    // 已有提交，待评分
    Submitted,
    // 无提交且已过截止时间
    Overdue,
    // 无提交，距截止不足 24 小时
    DueSoon,
    // 无提交，未设截止或距截止超过 24 小时
    Upcoming,
}

impl AssignmentStatus {
    /// 线上标签，客户端以此为准
    pub fn wire_label(&self) -> &'static str {
        match self {
            AssignmentStatus::Graded => "graded",
            AssignmentStatus::Submitted => "submitted",
            AssignmentStatus::Overdue => "overdue",
            AssignmentStatus::DueSoon => "due-soon",
            AssignmentStatus::Upcoming => "upcoming",
        }
    }

    /// 客户端徽标的展示变体
    pub fn display_variant(&self) -> &'static str {
        match self {
            AssignmentStatus::Graded => "success",
            AssignmentStatus::Submitted => "info",
            AssignmentStatus::Overdue => "danger",
            AssignmentStatus::DueSoon => "warning",
            AssignmentStatus::Upcoming => "default",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_label())
    }
}

/// 派生作业的展示状态
///
/// 纯函数：`now` 显式传入。`submissions` 按 assignment_id 匹配，
/// 业务规则是一个学生一次提交；出现多条时取第一条命中。
pub fn derive_assignment_status(
    assignment: &Assignment,
    submissions: &[Submission],
    now: DateTime<Utc>,
) -> AssignmentStatus {
    let submission = submissions
        .iter()
        .find(|s| s.assignment_id == assignment.id);

    match submission {
        Some(s) if s.is_graded() => AssignmentStatus::Graded,
        Some(_) => AssignmentStatus::Submitted,
        None => match assignment.due_date {
            // 截止时间严格在过去才算逾期
            Some(due) if due < now => AssignmentStatus::Overdue,
            Some(due) if due - now <= Duration::hours(DUE_SOON_WINDOW_HOURS) => {
                AssignmentStatus::DueSoon
            }
            _ => AssignmentStatus::Upcoming,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::SubmissionStatus;
    use chrono::TimeZone;

    fn assignment(id: i64, due: Option<DateTime<Utc>>) -> Assignment {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Assignment {
            id,
            tutor_id: 10,
            student_id: 20,
            subject_id: 1,
            academic_level_id: 1,
            title: "Quadratic equations".to_string(),
            description: None,
            due_date: due,
            file_ref: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn submission(assignment_id: i64, status: SubmissionStatus, grade: Option<f64>) -> Submission {
        Submission {
            id: 1,
            assignment_id,
            student_id: 20,
            submitted_at: Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap(),
            is_late: false,
            status,
            grade,
            feedback: None,
            file_ref: None,
        }
    }

    #[test]
    fn test_overdue_when_past_due_and_no_submission() {
        // 截止 2025-01-10T23:59，当前 2025-01-11T00:00
        let due = Utc.with_ymd_and_hms(2025, 1, 10, 23, 59, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
        let status = derive_assignment_status(&assignment(1, Some(due)), &[], now);
        assert_eq!(status, AssignmentStatus::Overdue);
        assert_eq!(status.wire_label(), "overdue");
    }

    #[test]
    fn test_due_soon_within_24_hours() {
        // 截止 2025-01-15T12:00，当前 2025-01-14T18:00（提前 18 小时）
        let due = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 14, 18, 0, 0).unwrap();
        let status = derive_assignment_status(&assignment(1, Some(due)), &[], now);
        assert_eq!(status, AssignmentStatus::DueSoon);
    }

    #[test]
    fn test_upcoming_beyond_24_hours() {
        let due = Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 14, 18, 0, 0).unwrap();
        let status = derive_assignment_status(&assignment(1, Some(due)), &[], now);
        assert_eq!(status, AssignmentStatus::Upcoming);
    }

    #[test]
    fn test_upcoming_without_due_date() {
        let now = Utc.with_ymd_and_hms(2025, 1, 14, 18, 0, 0).unwrap();
        let status = derive_assignment_status(&assignment(1, None), &[], now);
        assert_eq!(status, AssignmentStatus::Upcoming);
    }

    #[test]
    fn test_graded_wins_regardless_of_due_date() {
        let due = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let subs = vec![submission(1, SubmissionStatus::Graded, Some(87.5))];
        let status = derive_assignment_status(&assignment(1, Some(due)), &subs, now);
        assert_eq!(status, AssignmentStatus::Graded);
    }

    #[test]
    fn test_graded_status_without_grade_counts_as_submitted() {
        // 不变式：graded 要求状态和分数同时满足
        let now = Utc.with_ymd_and_hms(2025, 1, 14, 18, 0, 0).unwrap();
        let subs = vec![submission(1, SubmissionStatus::Graded, None)];
        let status = derive_assignment_status(&assignment(1, None), &subs, now);
        assert_eq!(status, AssignmentStatus::Submitted);
    }

    #[test]
    fn test_submission_for_other_assignment_is_ignored() {
        let due = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
        let subs = vec![submission(99, SubmissionStatus::Submitted, None)];
        let status = derive_assignment_status(&assignment(1, Some(due)), &subs, now);
        assert_eq!(status, AssignmentStatus::Overdue);
    }

    #[test]
    fn test_due_exactly_now_is_due_soon_not_overdue() {
        // 逾期要求严格过去
        let due = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
        let status = derive_assignment_status(&assignment(1, Some(due)), &[], due);
        assert_eq!(status, AssignmentStatus::DueSoon);
    }

    #[test]
    fn test_wire_labels_are_kebab_case() {
        assert_eq!(AssignmentStatus::DueSoon.wire_label(), "due-soon");
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::DueSoon).unwrap(),
            "\"due-soon\""
        );
    }
}
