use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::AssignHubError;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::{SubmissionStatus, is_late};
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::submissions::responses::CreateSubmissionResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 创建提交
/// POST /submissions
///
/// 迟交状态以服务端接收时刻对照作业截止时间判定，恰好等于截止时刻按时。
/// 每个学生对每个作业只能有一条提交，重复提交不留任何记录。
pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 只有学生可以提交作业
    if current_user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有学生可以提交作业",
        )));
    }

    // 1. 作业必须存在且处于启用状态
    let assignment = match storage.get_assignment_by_id(req.assignment_id).await {
        Ok(Some(assignment)) if assignment.is_active => assignment,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    // 2. 重复提交预检，并发下由唯一索引兜底
    match storage
        .get_submission_by_assignment_and_student(assignment.id, current_user.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                "该作业已提交，不能重复提交",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    }

    // 3. 至少包含一个文件
    if req.files.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FilesRequired,
            "提交必须至少包含一个文件",
        )));
    }

    // 4. 判定迟交状态，入库后不再改变
    let submitted_at = chrono::Utc::now();
    let late = is_late(submitted_at, assignment.deadline);
    let status = if late {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    };

    match storage
        .create_submission(current_user.id, req, status, submitted_at)
        .await
    {
        Ok(submission) => {
            tracing::info!(
                "Submission {} created by student {} for assignment {} (late: {})",
                submission.id,
                current_user.id,
                assignment.id,
                late
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CreateSubmissionResponse {
                    submission,
                    is_late: late,
                },
                "提交成功",
            )))
        }
        Err(AssignHubError::AlreadyExists(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AlreadySubmitted, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建提交失败: {e}"),
            )),
        ),
    }
}
