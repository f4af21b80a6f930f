use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success envelope: `{ "message": ..., <key>: payload }`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize = ()> {
    pub message: String,
    pub payload: Option<(&'static str, T)>,
    pub status_code: Option<StatusCode>,
}

impl ApiResponse<()> {
    /// Envelope with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            payload: None,
            status_code: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope carrying `data` under `key`
    pub fn with(message: impl Into<String>, key: &'static str, data: T) -> Self {
        Self {
            message: message.into(),
            payload: Some((key, data)),
            status_code: None,
        }
    }

    /// Override the default 200 status
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        let mut envelope = Map::new();
        envelope.insert("message".to_string(), Value::String(self.message));

        if let Some((key, data)) = self.payload {
            // Convert data to JSON Value for consistent envelope format
            match serde_json::to_value(&data) {
                Ok(value) => {
                    envelope.insert(key.to_string(), value);
                }
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "message": "Failed to serialize response data" })),
                    )
                        .into_response();
                }
            }
        }

        (status, Json(Value::Object(envelope))).into_response()
    }
}

// Convenience type alias
pub type ApiResult<T = ()> = Result<ApiResponse<T>, crate::error::ApiError>;
