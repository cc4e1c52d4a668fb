use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::responses::{
    SubmissionAssignmentInfo, SubmissionListItem, SubmissionListResponse, SubmissionStudent,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出某作业的全部提交（教师视角）
/// GET /assignments/{id}/submissions
///
/// 仅作业发布者或管理员可查看。
pub async fn list_assignment_submissions(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
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

    if assignment.teacher_id != current_user.id && current_user.role != UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能查看自己发布作业的提交",
        )));
    }

    let submissions = match storage.list_submissions_by_assignment(assignment_id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交列表失败: {e}"),
                )),
            );
        }
    };

    let assignment_info = SubmissionAssignmentInfo {
        id: assignment.id,
        title: assignment.title.clone(),
        subject: assignment.subject.clone(),
        max_marks: assignment.max_marks,
        deadline: assignment.deadline,
    };

    let mut items = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let student = match storage.get_user_by_id(submission.student_id).await {
            Ok(user) => user.map(|u| SubmissionStudent {
                id: u.id,
                name: u.name,
                email: u.email,
            }),
            Err(_) => None,
        };

        items.push(SubmissionListItem {
            submission,
            student,
            assignment: Some(assignment_info.clone()),
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmissionListResponse { items },
        "查询成功",
    )))
}
