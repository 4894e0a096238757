//! Helper types for JSON route handlers.
//!
//! Provides a JSON error responder so routes can use `?` and still produce
//! the `{"error": …}` body the front end expects.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use llm_translator_core::Error;
use serde_json::json;

/// Standard result type for JSON route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An HTTP status paired with a user-facing message, rendered as
/// `{"error": …}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Convert classified core errors into boundary responses.
///
/// Client-input classes map to 400; downstream failures map to 500 carrying
/// only the classified user message, never the raw error chain.
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::UnsupportedFile(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.user_message(),
        }
    }
}
