use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

/// 创建用户请求（注册或管理员创建）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// 用户列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListQuery {
    /// 按角色筛选
    pub role: Option<UserRole>,
    /// 按姓名或邮箱模糊搜索
    pub search: Option<String>,
}
