pub mod auth;
pub mod response;

pub use auth::{authorize, AccessGuard, AccessPolicy, AuthUser, AUTH_HEADER};
pub use response::{ApiResponse, ApiResult};
