//! Update handler.
//!
//! `PUT /collections/{collection_name}/{id}`

use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use docrest_persistence::core::DocumentStore;
use docrest_persistence::types::DocumentId;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{CollectionHandle, JsonDocument};
use crate::responses::WriteStatus;

/// Handler for updating one document by identifier.
///
/// Only the top-level fields present in the body are overwritten; other
/// fields keep their values. Nothing is created when the identifier does not
/// match. An `_id` in the body must equal the path identifier.
///
/// # Response
///
/// - `200 OK` - `{"msg": "success"}` if a document matched, else `{"msg": "error"}`
/// - `400 Bad Request` - Body is not a JSON object
/// - `500 Internal Server Error` - Malformed identifier, an attempt to change
///   `_id`, or store failure
///
/// # Example
///
/// ```http
/// PUT /collections/products/65f1a2b3c4d5e6f708192a3b HTTP/1.1
/// Content-Type: application/json
///
/// {"price": 25}
/// ```
pub async fn update_handler<S>(
    collection: CollectionHandle<S>,
    Path((_, id)): Path<(String, String)>,
    JsonDocument(fields): JsonDocument,
) -> RestResult<Response>
where
    S: DocumentStore + Send + Sync,
{
    debug!(
        collection = %collection.name(),
        id = %id,
        fields = fields.len(),
        "Processing update request"
    );

    let id = DocumentId::parse(&id)?;
    let outcome = collection.update_one(&id, fields).await?;

    debug!(
        collection = %collection.name(),
        id = %id,
        matched = outcome.matched_count,
        modified = outcome.modified_count,
        "Update completed"
    );

    Ok(WriteStatus::from_count(outcome.matched_count).into_response())
}
