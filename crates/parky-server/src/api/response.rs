//! Shared response shapes
//!
//! Successful responses are the bare transfer objects. Only failures that carry
//! a body use the error envelope below; not-found responses are empty.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error envelope returned with 5xx responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    /// Generic 500 body; the cause is logged by the caller, never exposed
    pub fn internal(message: impl Into<String>) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self::new("INTERNAL_ERROR", message)),
        )
            .into_response()
    }
}

/// 404 with an empty body
pub fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
