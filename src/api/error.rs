//! API 错误类型及处理

use super::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// 不返回数据的请求结果
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Result not found")]
    NotFound,

    /// 详细信息只写入服务端日志
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::error::AppError> for ApiError {
    fn from(err: crate::error::AppError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(detail) = &self {
            tracing::error!("❌ request failed: {}", detail);
        }
        let body = Json(ApiResponse::<()>::failure(status, self.to_string()));
        (status, body).into_response()
    }
}

/// API 操作的结果类型
pub type ApiResult<T> = Result<T, ApiError>;
