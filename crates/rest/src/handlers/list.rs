//! List handler.
//!
//! `GET /collections/{collection_name}`

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use docrest_persistence::core::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CollectionHandle;

/// Handler returning every document in a collection.
///
/// No filtering, pagination or projection is applied. An unknown collection
/// yields an empty array.
///
/// # Response
///
/// - `200 OK` - JSON array of documents
/// - `500 Internal Server Error` - Store failure
pub async fn list_handler<S>(collection: CollectionHandle<S>) -> RestResult<Response>
where
    S: DocumentStore + Send + Sync,
{
    debug!(collection = %collection.name(), "Processing list request");

    let documents = collection.find_all().await?;

    debug!(
        collection = %collection.name(),
        count = documents.len(),
        "List completed"
    );

    Ok(Json(documents).into_response())
}
