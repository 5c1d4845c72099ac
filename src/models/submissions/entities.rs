use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
//
// 只有两个持久化状态；evaluated 之类的展示状态由派生逻辑计算，不落库。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Submitted, // 已提交，等待评分
    Graded,    // 已评分
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::GRADED => Ok(SubmissionStatus::Graded),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: submitted, graded"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(SubmissionStatus::Submitted),
            "graded" => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交业务模型
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    // 关联的作业 ID
    pub assignment_id: i64,
    // 提交的学生 ID
    pub student_id: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 截止时间之后提交
    pub is_late: bool,
    pub status: SubmissionStatus,
    // 分数（0-100），评分后写入
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    // 附件引用（外部文件服务的不透明 token）
    pub file_ref: Option<String>,
}

impl Submission {
    /// 评分完成：状态为 graded 且分数已写入
    pub fn is_graded(&self) -> bool {
        self.status == SubmissionStatus::Graded && self.grade.is_some()
    }
}
