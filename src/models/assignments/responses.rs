use serde::Serialize;
use ts_rs::TS;

use super::entities::Assignment;
use crate::models::submissions::entities::SubmissionStatus;

/// 教师摘要信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentTeacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 学生视角下自己的提交摘要
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct MySubmissionInfo {
    pub id: i64,
    pub status: SubmissionStatus,
    pub marks: Option<i32>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// 作业列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub teacher: Option<AssignmentTeacher>,
    /// 仅学生视角填充
    pub my_submission: Option<MySubmissionInfo>,
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
}

/// 作业详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetail {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub teacher: Option<AssignmentTeacher>,
    pub my_submission: Option<MySubmissionInfo>,
}
