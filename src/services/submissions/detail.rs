use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::responses::{
    SubmissionAssignmentInfo, SubmissionDetail, SubmissionStudent,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 检查用户是否有权限查看某个提交
///
/// 学生只能查看自己的提交，教师只能查看自己发布作业下的提交，管理员不受限。
pub(crate) async fn check_submission_access(
    storage: &Arc<dyn Storage>,
    current_user: &User,
    submission: &Submission,
) -> Result<(), HttpResponse> {
    if current_user.role == UserRole::Admin {
        return Ok(());
    }

    if submission.student_id == current_user.id {
        return Ok(());
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

    if current_user.role == UserRole::Teacher && assignment.teacher_id == current_user.id {
        return Ok(());
    }

    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "没有查看该提交的权限",
    )))
}

/// 获取提交详情
/// GET /submissions/{id}
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
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

    if let Err(resp) = check_submission_access(&storage, &current_user, &submission).await {
        return Ok(resp);
    }

    let student = match storage.get_user_by_id(submission.student_id).await {
        Ok(user) => user.map(|u| SubmissionStudent {
            id: u.id,
            name: u.name,
            email: u.email,
        }),
        Err(_) => None,
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(assignment) => assignment.map(|a| SubmissionAssignmentInfo {
            id: a.id,
            title: a.title,
            subject: a.subject,
            max_marks: a.max_marks,
            deadline: a.deadline,
        }),
        Err(_) => None,
    };

    let graded_by_name = match submission.graded_by {
        Some(grader_id) => match storage.get_user_by_id(grader_id).await {
            Ok(user) => user.map(|u| u.name),
            Err(_) => None,
        },
        None => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmissionDetail {
            submission,
            student,
            assignment,
            graded_by_name,
        },
        "查询成功",
    )))
}
