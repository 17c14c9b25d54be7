//! Not-found fallback.

use axum::http::{Method, Uri};
use tracing::debug;

use crate::error::RestError;

/// Handler for every request no route or static file matched.
///
/// Always responds `404` with the body `Resource not found!`.
pub async fn not_found_handler(method: Method, uri: Uri) -> RestError {
    debug!(method = %method, uri = %uri, "No route matched");
    RestError::NotFound
}
