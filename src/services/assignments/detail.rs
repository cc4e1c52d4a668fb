use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::{
    AssignmentDetail, AssignmentTeacher, MySubmissionInfo,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 获取作业详情
/// GET /assignments/{id}
pub async fn get_assignment(
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

    // 已停用的作业对学生不可见
    if !assignment.is_active && current_user.role == UserRole::Student {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        )));
    }

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

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentDetail {
            assignment,
            teacher,
            my_submission,
        },
        "查询成功",
    )))
}
