use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 布置作业的教师 ID
    pub teacher_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 所属科目
    pub subject: String,
    // 截止时间
    pub deadline: chrono::DateTime<chrono::Utc>,
    // 满分
    pub max_marks: i32,
    // 允许的文件扩展名（由外部上传服务执行校验）
    pub allowed_file_types: Vec<String>,
    // 单文件大小上限（MB，同上仅作记录）
    pub max_file_size: i32,
    // 教师附件（JSON 文本，由外部文件服务管理）
    pub attachments: Option<String>,
    // 是否启用（软删除标记）
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
