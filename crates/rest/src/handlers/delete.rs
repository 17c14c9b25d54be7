//! Delete handler.
//!
//! `DELETE /collections/{collection_name}/{id}`

use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use docrest_persistence::core::DocumentStore;
use docrest_persistence::types::DocumentId;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CollectionHandle;
use crate::responses::WriteStatus;

/// Handler for deleting one document by identifier.
///
/// # Response
///
/// - `200 OK` - `{"msg": "success"}` if a document was removed, else `{"msg": "error"}`
/// - `500 Internal Server Error` - Malformed identifier or store failure
pub async fn delete_handler<S>(
    collection: CollectionHandle<S>,
    Path((_, id)): Path<(String, String)>,
) -> RestResult<Response>
where
    S: DocumentStore + Send + Sync,
{
    debug!(
        collection = %collection.name(),
        id = %id,
        "Processing delete request"
    );

    let id = DocumentId::parse(&id)?;
    let outcome = collection.delete_one(&id).await?;

    debug!(
        collection = %collection.name(),
        id = %id,
        deleted = outcome.deleted_count,
        "Delete completed"
    );

    Ok(WriteStatus::from_count(outcome.deleted_count).into_response())
}
