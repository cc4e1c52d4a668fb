use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
//
// submitted / late 由创建时刻一次性判定，graded / returned 由批改流程迁移。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Submitted, // 按时提交
    Late,      // 迟交
    Graded,    // 已批改
    Returned,  // 已退回重做
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const LATE: &'static str = "late";
    pub const GRADED: &'static str = "graded";
    pub const RETURNED: &'static str = "returned";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: submitted, late, graded, returned"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", Self::SUBMITTED),
            SubmissionStatus::Late => write!(f, "{}", Self::LATE),
            SubmissionStatus::Graded => write!(f, "{}", Self::GRADED),
            SubmissionStatus::Returned => write!(f, "{}", Self::RETURNED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(SubmissionStatus::Submitted),
            "late" => Ok(SubmissionStatus::Late),
            "graded" => Ok(SubmissionStatus::Graded),
            "returned" => Ok(SubmissionStatus::Returned),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 提交附件元数据
///
/// 文件本体由外部上传服务持久化，这里只记录元数据。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct FileMeta {
    /// 存储文件名
    pub filename: String,
    /// 原始文件名
    pub original_name: String,
    /// 存储路径
    pub path: String,
    /// 文件大小（字节）
    pub size: i64,
    /// MIME 类型
    pub mimetype: String,
}

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub files: Vec<FileMeta>,
    pub comments: String,
    pub status: SubmissionStatus,
    pub marks: Option<i32>,
    pub feedback: String,
    pub graded_by: Option<i64>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    /// 创建时固定，之后不再变化
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// 迟交判定
///
/// 严格晚于截止时间才算迟交，恰好等于截止时刻视为按时。
/// 判定结果在创建时写入 status，之后修改作业截止时间不会重算。
pub fn is_late(
    submitted_at: chrono::DateTime<chrono::Utc>,
    deadline: chrono::DateTime<chrono::Utc>,
) -> bool {
    submitted_at > deadline
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for status in [
            SubmissionStatus::Submitted,
            SubmissionStatus::Late,
            SubmissionStatus::Graded,
            SubmissionStatus::Returned,
        ] {
            let parsed = SubmissionStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(SubmissionStatus::from_str("pending").is_err());
    }

    #[test]
    fn test_late_after_deadline() {
        let deadline = Utc::now();
        assert!(is_late(deadline + Duration::seconds(1), deadline));
        assert!(is_late(deadline + Duration::days(2), deadline));
    }

    #[test]
    fn test_on_time_before_deadline() {
        let deadline = Utc::now();
        assert!(!is_late(deadline - Duration::seconds(1), deadline));
        assert!(!is_late(deadline - Duration::days(7), deadline));
    }

    #[test]
    fn test_exact_deadline_counts_as_on_time() {
        let deadline = Utc::now();
        assert!(!is_late(deadline, deadline));
    }
}
