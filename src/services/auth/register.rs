use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::AssignHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::LoginResponse,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    mut create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 参数校验
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

    // 2. 管理员账户只能由运行时初始化创建
    if create_request.role == UserRole::Admin {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RoleInvalid,
            "不允许注册管理员账户",
        )));
    }

    // 3. 哈希密码
    create_request.password = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "注册失败",
                )),
            );
        }
    };

    // 4. 创建用户，邮箱唯一性由存储层保证
    let user = match storage.create_user(create_request).await {
        Ok(user) => user,
        Err(AssignHubError::AlreadyExists(msg)) => {
            return Ok(HttpResponse::Conflict()
                .json(ApiResponse::error_empty(ErrorCode::UserAlreadyExists, msg)));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("注册失败: {e}"),
                )),
            );
        }
    };

    // 5. 注册成功直接签发令牌
    match user.generate_access_token() {
        Ok(access_token) => {
            tracing::info!("User {} registered successfully", user.email);

            let response = LoginResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
                user,
                created_at: chrono::Utc::now(),
            };

            Ok(HttpResponse::Created().json(ApiResponse::success(response, "注册成功")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "注册成功，但无法生成令牌，请重新登录",
                )),
            )
        }
    }
}
