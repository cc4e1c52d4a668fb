use serde::Deserialize;
use ts_rs::TS;

fn default_allowed_file_types() -> Vec<String> {
    ["pdf", "doc", "docx", "txt", "zip"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_file_size() -> i32 {
    10
}

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub max_marks: i32,
    #[serde(default = "default_allowed_file_types")]
    pub allowed_file_types: Vec<String>,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: i32,
    pub attachments: Option<String>,
}

/// 更新作业请求（字段均可选，未提供的保持不变）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub max_marks: Option<i32>,
    pub is_active: Option<bool>,
}

/// 作业列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    /// 按科目筛选
    pub subject: Option<String>,
}
