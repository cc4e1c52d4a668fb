pub mod stats;
pub mod submissions;
pub mod users;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::models::users::requests::{CreateUserRequest, UserListQuery};
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 平台总览统计
    pub async fn get_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_stats(self, request).await
    }

    /// 列出用户
    pub async fn list_users(
        &self,
        request: &HttpRequest,
        query: UserListQuery,
    ) -> ActixResult<HttpResponse> {
        users::list_users(self, request, query).await
    }

    /// 创建用户
    pub async fn create_user(
        &self,
        request: &HttpRequest,
        create_request: CreateUserRequest,
    ) -> ActixResult<HttpResponse> {
        users::create_user(self, request, create_request).await
    }

    /// 启用/停用用户
    pub async fn toggle_user_active(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        users::toggle_user_active(self, request, user_id).await
    }

    /// 删除用户
    pub async fn delete_user(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        users::delete_user(self, request, user_id).await
    }

    /// 分页列出全部提交
    pub async fn list_all_submissions(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        submissions::list_all_submissions(self, request, query).await
    }
}
