use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;

/// 提交者信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionStudent {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 提交关联的作业信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionAssignmentInfo {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub max_marks: i32,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

/// 创建提交响应
///
/// is_late 与 status 分开返回，调用方无需自行从 status 反推。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionResponse {
    pub submission: Submission,
    pub is_late: bool,
}

/// 提交详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionDetail {
    #[serde(flatten)]
    pub submission: Submission,
    pub student: Option<SubmissionStudent>,
    pub assignment: Option<SubmissionAssignmentInfo>,
    pub graded_by_name: Option<String>,
}

/// 提交列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    pub submission: Submission,
    pub student: Option<SubmissionStudent>,
    pub assignment: Option<SubmissionAssignmentInfo>,
}

/// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
}
