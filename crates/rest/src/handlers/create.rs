//! Create handler.
//!
//! `POST /collections/{collection_name}`

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use docrest_persistence::core::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{CollectionHandle, JsonDocument};

/// Handler for inserting a document.
///
/// The body is stored verbatim. The store assigns an `_id` only when the
/// body has none.
///
/// # Response
///
/// - `200 OK` - `{"acknowledged": true, "insertedId": <id>}`
/// - `400 Bad Request` - Body is not valid JSON or not an object
/// - `500 Internal Server Error` - Duplicate `_id` or store failure
///
/// # Example
///
/// ```http
/// POST /collections/products HTTP/1.1
/// Content-Type: application/json
///
/// {"subject": "Math", "location": "NYC", "price": 20, "availability": 5}
/// ```
pub async fn create_handler<S>(
    collection: CollectionHandle<S>,
    JsonDocument(document): JsonDocument,
) -> RestResult<Response>
where
    S: DocumentStore + Send + Sync,
{
    debug!(
        collection = %collection.name(),
        fields = document.len(),
        "Processing create request"
    );

    let ack = collection.insert_one(document).await?;

    debug!(
        collection = %collection.name(),
        id = %ack.inserted_id,
        "Document created"
    );

    Ok(Json(ack).into_response())
}
