use axum::http::StatusCode;
use serde::Serialize;

/// 所有 JSON 响应共用的外层结构
///
/// `status` 与 HTTP 状态码一致，为数字
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_has_no_data_key() {
        let body = ApiResponse::<()>::failure(StatusCode::NOT_FOUND, "Result not found");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "status": 404, "message": "Result not found" })
        );
    }

    #[test]
    fn test_success_has_no_message_key() {
        let body = ApiResponse::success(json!({ "sgpa": "8.00" }));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "status": 200, "data": { "sgpa": "8.00" } })
        );
    }
}
