//! 路径参数安全提取器
//!
//! 将路径中的 ID 解析为 i64，解析失败时返回统一的 ApiResponse 错误，
//! 而不是 actix 默认的纯文本 404。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(ErrorBadRequest(
                        serde_json::to_string(&ApiResponse::<()>::error_empty(
                            ErrorCode::BadRequest,
                            concat!("无效的", $label, " ID"),
                        ))
                        .unwrap_or_default(),
                    )),
                })
            }
        }
    };
}

define_id_extractor!(SafeUserIdI64, "id", "用户");
define_id_extractor!(SafeAssignmentIdI64, "id", "作业");
define_id_extractor!(SafeSubmissionIdI64, "id", "提交");
