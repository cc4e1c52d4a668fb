use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::errors::Result;
use crate::models::admin::responses::{AdminStatsResponse, StatsOverview};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

async fn collect_overview(storage: &dyn Storage) -> Result<StatsOverview> {
    let total_students = storage.count_active_users_by_role(&UserRole::Student).await?;
    let total_teachers = storage.count_active_users_by_role(&UserRole::Teacher).await?;
    let total_assignments = storage.count_active_assignments().await?;
    let total_submissions = storage.count_submissions().await?;
    let graded_submissions = storage
        .count_submissions_by_status(SubmissionStatus::Graded)
        .await?;
    let late_submissions = storage
        .count_submissions_by_status(SubmissionStatus::Late)
        .await?;
    // 待批改 = 尚未进入批改流程的提交（按时 + 迟交）
    let pending_grading = storage
        .count_submissions_by_status(SubmissionStatus::Submitted)
        .await?
        + late_submissions;
    let average_marks = storage.average_marks().await?;

    Ok(StatsOverview {
        total_students,
        total_teachers,
        total_assignments,
        total_submissions,
        graded_submissions,
        late_submissions,
        pending_grading,
        average_marks,
    })
}

/// 平台总览统计
/// GET /admin/stats
pub async fn get_stats(service: &AdminService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match collect_overview(storage.as_ref()).await {
        Ok(overview) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdminStatsResponse { overview },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("统计查询失败: {e}"),
            )),
        ),
    }
}
