use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::responses::{
    SubmissionAssignmentInfo, SubmissionListItem, SubmissionListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// 列出当前学生的全部提交
/// GET /submissions/my
pub async fn list_my_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let submissions = match storage.list_submissions_by_student(current_user.id).await {
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

    let mut items = Vec::with_capacity(submissions.len());
    for submission in submissions {
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

        items.push(SubmissionListItem {
            submission,
            student: None,
            assignment,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmissionListResponse { items },
        "查询成功",
    )))
}
