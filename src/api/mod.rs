//! HTTP 接口层
//!
//! 校验请求参数，并把汇总结果映射为响应

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use routes::router;
pub use state::AppState;
