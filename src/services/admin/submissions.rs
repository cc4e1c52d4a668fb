use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::submissions::responses::{
    SubmissionAssignmentInfo, SubmissionListItem, SubmissionStudent,
};
use crate::models::{ApiResponse, ErrorCode, PaginatedResponse, PaginationQuery};

/// 分页列出全部提交（管理员视角）
/// GET /admin/submissions
pub async fn list_all_submissions(
    service: &AdminService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (submissions, pagination) = match storage.list_all_submissions(query).await {
        Ok(page) => page,
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

        items.push(SubmissionListItem {
            submission,
            student,
            assignment,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        PaginatedResponse { items, pagination },
        "查询成功",
    )))
}
