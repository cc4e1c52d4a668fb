use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::assignments::responses::{
    AssignmentListItem, AssignmentListResponse, AssignmentTeacher, MySubmissionInfo,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出作业
/// GET /assignments
///
/// 学生视角附带本人的提交摘要；教师仅看到自己发布的作业。
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let teacher_filter = match current_user.role {
        UserRole::Teacher => Some(current_user.id),
        _ => None,
    };

    let assignments = match storage.list_assignments(teacher_filter, query).await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业列表失败: {e}"),
                )),
            );
        }
    };

    let mut items = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let teacher = match storage.get_user_by_id(assignment.teacher_id).await {
            Ok(user) => user.map(|u| AssignmentTeacher {
                id: u.id,
                name: u.name,
                email: u.email,
            }),
            Err(_) => None,
        };

        let my_submission = if current_user.role == UserRole::Student {
            match storage
                .get_submission_by_assignment_and_student(assignment.id, current_user.id)
                .await
            {
                Ok(submission) => submission.map(|s| MySubmissionInfo {
                    id: s.id,
                    status: s.status,
                    marks: s.marks,
                    submitted_at: s.submitted_at,
                }),
                Err(_) => None,
            }
        } else {
            None
        };

        items.push(AssignmentListItem {
            assignment,
            teacher,
            my_submission,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentListResponse { items },
        "查询成功",
    )))
}
