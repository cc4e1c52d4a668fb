use super::SeaOrmStorage;
use crate::entity::prelude::Submissions;
use crate::entity::submissions::{ActiveModel, Column};
use crate::errors::{AssignHubError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::CreateSubmissionRequest,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建提交
    ///
    /// 迟交状态由调用方依据提交时刻与截止时间计算后传入，入库后不再改变。
    /// (assignment_id, student_id) 唯一索引兜底并发重复提交，冲突时不留任何记录。
    pub async fn create_submission_impl(
        &self,
        student_id: i64,
        req: CreateSubmissionRequest,
        status: SubmissionStatus,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission> {
        let files = serde_json::to_string(&req.files)?;

        let model = ActiveModel {
            assignment_id: Set(req.assignment_id),
            student_id: Set(student_id),
            files: Set(files),
            comments: Set(req.comments),
            status: Set(status.to_string()),
            marks: Set(None),
            feedback: Set(String::new()),
            graded_by: Set(None),
            graded_at: Set(None),
            submitted_at: Set(submitted_at.timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                AssignHubError::already_exists("该作业已提交，不能重复提交")
            } else {
                AssignHubError::database_operation(format!("创建提交失败: {e}"))
            }
        })?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 某学生的全部提交
    pub async fn list_submissions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 某作业的全部提交
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 分页列出全部提交
    pub async fn list_all_submissions_impl(
        &self,
        query: PaginationQuery,
    ) -> Result<(Vec<Submission>, PaginationInfo)> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let paginator = Submissions::find()
            .order_by_desc(Column::SubmittedAt)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交页数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok((
            submissions.into_iter().map(|m| m.into_submission()).collect(),
            PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        ))
    }

    /// 批改提交
    ///
    /// 重复批改直接覆盖上一次结果，不保留历史。
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        marks: i32,
        feedback: String,
        graded_by: i64,
        graded_at: DateTime<Utc>,
    ) -> Result<Option<Submission>> {
        let existing = self.get_submission_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(SubmissionStatus::Graded.to_string()),
            marks: Set(Some(marks)),
            feedback: Set(feedback),
            graded_by: Set(Some(graded_by)),
            graded_at: Set(Some(graded_at.timestamp())),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("批改提交失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }

    /// 退回重做
    ///
    /// 仅替换状态与反馈，保留已有的分数与批改记录。
    pub async fn return_submission_impl(
        &self,
        id: i64,
        feedback: String,
    ) -> Result<Option<Submission>> {
        let existing = self.get_submission_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(SubmissionStatus::Returned.to_string()),
            feedback: Set(feedback),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("退回提交失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }

    /// 统计提交总数
    pub async fn count_submissions_impl(&self) -> Result<i64> {
        let count = Submissions::find()
            .count(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("统计提交数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 按状态统计提交数量
    pub async fn count_submissions_by_status_impl(
        &self,
        status: SubmissionStatus,
    ) -> Result<i64> {
        let count = Submissions::find()
            .filter(Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("统计提交数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 已批改提交的平均分，没有已批改提交时返回 None
    pub async fn average_marks_impl(&self) -> Result<Option<f64>> {
        let marks: Vec<Option<i32>> = Submissions::find()
            .select_only()
            .column(Column::Marks)
            .filter(Column::Marks.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AssignHubError::database_operation(format!("统计平均分失败: {e}")))?;

        let marks: Vec<i32> = marks.into_iter().flatten().collect();
        if marks.is_empty() {
            return Ok(None);
        }

        let sum: i64 = marks.iter().map(|m| *m as i64).sum();
        Ok(Some(sum as f64 / marks.len() as f64))
    }
}
