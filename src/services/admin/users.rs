use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::errors::AssignHubError;
use crate::middlewares::RequireJWT;
use crate::models::users::requests::{CreateUserRequest, UserListQuery};
use crate::models::users::responses::{ToggleUserResponse, UserListResponse, UserResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

/// 列出用户
/// GET /admin/users
pub async fn list_users(
    service: &AdminService,
    request: &HttpRequest,
    query: UserListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users(query).await {
        Ok(users) => {
            let total = users.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserListResponse {
                    items: users,
                    total,
                },
                "查询成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询用户列表失败: {e}"),
            )),
        ),
    }
}

/// 创建用户
/// POST /admin/users
///
/// 与注册不同，管理员可以创建任意角色的账户，包括其他管理员。
pub async fn create_user(
    service: &AdminService,
    request: &HttpRequest,
    mut create_request: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_name(&create_request.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    if let Err(msg) = validate_email(&create_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_password(&create_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    create_request.password = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建用户失败",
                )),
            );
        }
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("Admin created user {} ({})", user.email, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(UserResponse { user }, "创建成功")))
        }
        Err(AssignHubError::AlreadyExists(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::UserAlreadyExists, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建用户失败: {e}"),
            )),
        ),
    }
}

/// 启用/停用用户
/// PUT /admin/users/{id}/toggle
pub async fn toggle_user_active(
    service: &AdminService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许操作自己的账户
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "不能停用自己的账户",
        )));
    }

    match storage.toggle_user_active(user_id).await {
        Ok(Some(user)) => {
            tracing::info!("User {} active state toggled to {}", user.id, user.is_active);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ToggleUserResponse {
                    id: user.id,
                    is_active: user.is_active,
                },
                "操作成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新用户状态失败: {e}"),
            )),
        ),
    }
}

/// 删除用户
/// DELETE /admin/users/{id}
pub async fn delete_user(
    service: &AdminService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许删除自己的账户
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "不能删除自己的账户",
        )));
    }

    match storage.delete_user(user_id).await {
        Ok(true) => {
            tracing::info!("User {} deleted", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除用户失败: {e}"),
            )),
        ),
    }
}
