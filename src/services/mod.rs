//! 业务服务模块
//!
//! 每个服务是一个轻量结构体，存储句柄默认从请求的 app data 中解析，
//! 测试时可注入独立的存储实例。

pub mod admin;
pub mod assignments;
pub mod auth;
pub mod submissions;

pub use admin::AdminService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use submissions::SubmissionService;
