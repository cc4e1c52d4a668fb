use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{
    PaginationInfo, PaginationQuery,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::CreateSubmissionRequest,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UserListQuery},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段应已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户（按角色筛选 / 模糊搜索）
    async fn list_users(&self, query: UserListQuery) -> Result<Vec<User>>;
    // 切换用户启用状态
    async fn toggle_user_active(&self, id: i64) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<i64>;
    // 按角色统计启用中的用户数
    async fn count_active_users_by_role(&self, role: &UserRole) -> Result<i64>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出启用中的作业，teacher_id 给定时只返回该教师的作业
    async fn list_assignments(
        &self,
        teacher_id: Option<i64>,
        query: AssignmentListQuery,
    ) -> Result<Vec<Assignment>>;
    // 更新作业（部分字段）
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 停用作业（软删除）
    async fn deactivate_assignment(&self, id: i64) -> Result<bool>;
    // 启用中的作业数
    async fn count_active_assignments(&self) -> Result<i64>;

    /// 提交管理方法
    // 创建提交。(assignment_id, student_id) 的唯一性由数据库唯一索引保证，
    // 冲突时返回 AlreadyExists。
    async fn create_submission(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
        status: SubmissionStatus,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取某学生对某作业的提交
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 某学生的全部提交（按提交时间倒序）
    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>>;
    // 某作业的全部提交（按提交时间倒序）
    async fn list_submissions_by_assignment(&self, assignment_id: i64)
    -> Result<Vec<Submission>>;
    // 分页列出全部提交（按提交时间倒序）
    async fn list_all_submissions(
        &self,
        query: PaginationQuery,
    ) -> Result<(Vec<Submission>, PaginationInfo)>;
    // 批改：写入分数/反馈/批改人/批改时间，status 置为 graded。
    // 重复批改为幂等覆盖，不保留历史。
    async fn grade_submission(
        &self,
        id: i64,
        marks: i32,
        feedback: String,
        graded_by: i64,
        graded_at: DateTime<Utc>,
    ) -> Result<Option<Submission>>;
    // 退回重做：status 置为 returned，替换反馈，保留已有分数与批改记录
    async fn return_submission(&self, id: i64, feedback: String) -> Result<Option<Submission>>;
    // 提交总数
    async fn count_submissions(&self) -> Result<i64>;
    // 按状态统计提交数
    async fn count_submissions_by_status(&self, status: SubmissionStatus) -> Result<i64>;
    // 已批改提交的平均分
    async fn average_marks(&self) -> Result<Option<f64>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
