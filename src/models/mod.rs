pub mod admin;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod submissions;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 统一业务错误码
///
/// code 为 0 表示成功，4xxxx 为客户端错误，5xxxx 为服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    FilesRequired = 40001,
    MarksOutOfRange = 40002,
    UserEmailInvalid = 40003,
    UserPasswordInvalid = 40004,
    UserNameInvalid = 40005,
    RoleInvalid = 40006,

    Unauthorized = 40100,
    AuthFailed = 40101,
    AccountDisabled = 40102,

    Forbidden = 40300,

    NotFound = 40400,
    UserNotFound = 40401,
    AssignmentNotFound = 40402,
    SubmissionNotFound = 40403,

    AlreadySubmitted = 40901,
    UserAlreadyExists = 40902,

    InternalServerError = 50000,
}
