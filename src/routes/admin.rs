use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::PaginationQuery;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UserListQuery};
use crate::services::AdminService;
use crate::utils::SafeUserIdI64;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

// 平台总览统计
pub async fn get_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.get_stats(&req).await
}

// 列出用户
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListQuery>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_users(&req, query.into_inner()).await
}

// 创建用户
pub async fn create_user(
    req: HttpRequest,
    payload: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_user(&req, payload.into_inner()).await
}

// 启用/停用用户
pub async fn toggle_user_active(
    req: HttpRequest,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.toggle_user_active(&req, user_id.0).await
}

// 删除用户
pub async fn delete_user(req: HttpRequest, user_id: SafeUserIdI64) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_user(&req, user_id.0).await
}

// 分页列出全部提交
pub async fn list_all_submissions(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .list_all_submissions(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/stats", web::get().to(get_stats))
            .route("/users", web::get().to(list_users))
            .route("/users", web::post().to(create_user))
            .route("/users/{id}/toggle", web::put().to(toggle_user_active))
            .route("/users/{id}", web::delete().to(delete_user))
            .route("/submissions", web::get().to(list_all_submissions)),
    );
}
