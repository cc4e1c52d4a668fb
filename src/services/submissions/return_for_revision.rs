use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use super::grade::check_grading_permission;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::ReturnSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 退回重做
/// PUT /submissions/{id}/return
///
/// 仅替换状态与反馈，已有的分数与批改记录保留。反馈为自由文本，允许为空。
pub async fn return_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: ReturnSubmissionRequest,
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

    if let Err(resp) = check_grading_permission(&storage, &current_user, &submission).await {
        return Ok(resp);
    }

    match storage.return_submission(submission_id, req.feedback).await {
        Ok(Some(returned)) => {
            tracing::info!(
                "Submission {} returned for revision by user {}",
                submission_id,
                current_user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(returned, "已退回重做")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("退回提交失败: {e}"),
            )),
        ),
    }
}
