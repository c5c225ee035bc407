use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use memograph_engine::EngineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Upstream unavailable")]
    Upstream,

    #[error("Internal server error")]
    Internal,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ThreadNotFound(_) | EngineError::MessageNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            EngineError::Validation(msg) => ApiError::BadRequest(msg),
            EngineError::Store(e) => {
                tracing::error!("Storage error: {}", e);
                ApiError::Upstream
            }
            EngineError::Provider(e) => {
                tracing::error!("Provider error: {}", e);
                ApiError::Upstream
            }
            EngineError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Upstream => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
