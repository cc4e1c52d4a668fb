use serde::Deserialize;
use ts_rs::TS;

use super::entities::FileMeta;

/// 创建提交请求
///
/// 文件已由外部上传服务校验并落盘，这里只接收元数据。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub files: Vec<FileMeta>,
    #[serde(default)]
    pub comments: String,
}

/// 批改请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub marks: i32,
    pub feedback: Option<String>,
}

/// 退回重做请求
///
/// 反馈为自由文本，允许为空，缺省按空串处理。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ReturnSubmissionRequest {
    #[serde(default)]
    pub feedback: String,
}
