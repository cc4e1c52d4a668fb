use serde::Serialize;
use ts_rs::TS;

/// 平台总览统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct StatsOverview {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_assignments: i64,
    pub total_submissions: i64,
    pub graded_submissions: i64,
    pub late_submissions: i64,
    pub pending_grading: i64,
    /// 已批改提交的平均分，无已批改提交时为 None
    pub average_marks: Option<f64>,
}

/// 管理员统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct AdminStatsResponse {
    pub overview: StatsOverview,
}
