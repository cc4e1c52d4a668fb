use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, ReturnSubmissionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::SafeSubmissionIdI64;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 创建提交
pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

// 列出我的提交
pub async fn list_my_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_my_submissions(&req).await
}

// 获取提交详情
pub async fn get_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, submission_id.0).await
}

// 批改提交
pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, submission_id.0, body.into_inner())
        .await
}

// 退回重做
pub async fn return_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
    body: web::Json<ReturnSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .return_submission(&req, submission_id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_submission))
            .route("/my", web::get().to(list_my_submissions))
            .route("/{id}", web::get().to(get_submission))
            .service(
                web::scope("")
                    .wrap(RequireRole::new_any(UserRole::teacher_roles()))
                    .route("/{id}/grade", web::put().to(grade_submission))
                    .route("/{id}/return", web::put().to(return_submission)),
            ),
    );
}
