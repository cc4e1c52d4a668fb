use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_marks;

/// 检查用户是否有权限批改某个提交，通过时返回对应的作业
///
/// 管理员不受限，教师只能批改自己发布作业下的提交。
pub(crate) async fn check_grading_permission(
    storage: &Arc<dyn Storage>,
    current_user: &User,
    submission: &Submission,
) -> Result<Assignment, HttpResponse> {
    if !current_user.role.can_grade() {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "没有批改权限",
        )));
    }

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && assignment.teacher_id != current_user.id {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能批改自己发布作业的提交",
        )));
    }

    Ok(assignment)
}

/// 批改提交
/// PUT /submissions/{id}/grade
///
/// 分数必须在 [0, 满分] 闭区间内。重复批改直接覆盖上一次结果。
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    let assignment = match check_grading_permission(&storage, &current_user, &submission).await {
        Ok(assignment) => assignment,
        Err(resp) => return Ok(resp),
    };

    // 分数范围校验，上限取该作业的满分
    if let Err(msg) = validate_marks(req.marks, assignment.max_marks) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::MarksOutOfRange, msg)));
    }

    let feedback = req.feedback.unwrap_or_default();

    match storage
        .grade_submission(
            submission_id,
            req.marks,
            feedback,
            current_user.id,
            chrono::Utc::now(),
        )
        .await
    {
        Ok(Some(graded)) => {
            tracing::info!(
                "Submission {} graded by user {} with marks {}",
                submission_id,
                current_user.id,
                req.marks
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "批改成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("批改提交失败: {e}"),
            )),
        ),
    }
}
