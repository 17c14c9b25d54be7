//! Result payload for single-document writes.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Outcome of an update or delete, as reported to the client.
///
/// A write that matched nothing is reported as [`WriteStatus::Error`] with
/// HTTP 200; it is an expected outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    /// Exactly one document was affected.
    Success,
    /// No document was affected.
    Error,
}

impl WriteStatus {
    /// Maps an affected-document count to a status.
    pub fn from_count(count: u64) -> Self {
        if count == 1 {
            WriteStatus::Success
        } else {
            WriteStatus::Error
        }
    }
}

#[derive(Serialize)]
struct WriteStatusBody {
    msg: WriteStatus,
}

impl IntoResponse for WriteStatus {
    fn into_response(self) -> Response {
        Json(WriteStatusBody { msg: self }).into_response()
    }
}
