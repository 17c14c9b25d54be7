//! Error types for the docrest REST API.
//!
//! Every handler returns [`RestResult`], and every failure reaches the client
//! through the single [`IntoResponse`] implementation below. Bodies are plain
//! text; no structured error codes are exposed.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | NotFound | 404 | `Resource not found!` |
//! | BadRequest | 400 | the message |
//! | InternalError | 500 | `Internal Server Error` |
//!
//! Storage errors, including malformed document ids, are all treated as
//! internal errors. The details are logged, not returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docrest_persistence::error::StorageError;
use std::fmt;

/// Body of every 404 response.
pub const NOT_FOUND_BODY: &str = "Resource not found!";

/// Body of every 500 response.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// No route or file matched the request (HTTP 404).
    NotFound,

    /// The request body could not be used (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message, logged but not sent to the client.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound => write!(f, "Resource not found"),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            RestError::NotFound => (status, NOT_FOUND_BODY).into_response(),
            RestError::BadRequest { message } => {
                tracing::debug!(error = %message, "Rejected request body");
                (status, message).into_response()
            }
            RestError::InternalError { message } => {
                tracing::error!(error = %message, "Request failed");
                (status, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
