use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error answered to HTTP clients as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to fetch researcher data: {0}")]
    Fetch(crate::Error),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(crate::Error),
}

impl From<crate::Error> for ApiError {
    fn from(error: crate::Error) -> Self {
        match error {
            crate::Error::InvalidParameter(msg) => ApiError::BadRequest(msg),
            error if error.is_fetch_failure() => ApiError::Fetch(error),
            error => ApiError::Unexpected(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
