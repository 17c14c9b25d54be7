//! Collection handle extractor.
//!
//! Binds the `{collection_name}` path parameter to the shared store client,
//! giving handlers a handle scoped to one collection.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use docrest_persistence::core::DocumentStore;
use docrest_persistence::error::StorageResult;
use docrest_persistence::filter::Filter;
use docrest_persistence::types::{DeleteOutcome, Document, DocumentId, InsertAck, UpdateOutcome};
use serde_json::Value;

use crate::error::RestError;
use crate::state::AppState;

/// Name of the path parameter holding the collection name.
pub const COLLECTION_PARAM: &str = "collection_name";

/// A store handle bound to one collection.
///
/// Any name is accepted; collections are created by the store on first
/// insert, and reading an unknown collection yields no documents.
///
/// # Example
///
/// ```rust,ignore
/// use docrest_rest::extractors::CollectionHandle;
///
/// async fn handler<S: DocumentStore>(collection: CollectionHandle<S>) {
///     let docs = collection.find_all().await?;
/// }
/// ```
pub struct CollectionHandle<S> {
    name: String,
    storage: Arc<S>,
}

impl<S> std::fmt::Debug for CollectionHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S: DocumentStore> CollectionHandle<S> {
    /// Creates a handle for `name` over `storage`.
    pub fn new(name: impl Into<String>, storage: Arc<S>) -> Self {
        Self {
            name: name.into(),
            storage,
        }
    }

    /// Returns the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the documents matching `filter`.
    pub async fn find(&self, filter: &Filter) -> StorageResult<Vec<Value>> {
        self.storage.find(&self.name, filter).await
    }

    /// Returns every document in the collection.
    pub async fn find_all(&self) -> StorageResult<Vec<Value>> {
        self.find(&Filter::All).await
    }

    /// Inserts one document.
    pub async fn insert_one(&self, document: Document) -> StorageResult<InsertAck> {
        self.storage.insert_one(&self.name, document).await
    }

    /// Overwrites the given fields on the document with identifier `id`.
    pub async fn update_one(
        &self,
        id: &DocumentId,
        fields: Document,
    ) -> StorageResult<UpdateOutcome> {
        self.storage.update_one(&self.name, id, fields).await
    }

    /// Removes the document with identifier `id`.
    pub async fn delete_one(&self, id: &DocumentId) -> StorageResult<DeleteOutcome> {
        self.storage.delete_one(&self.name, id).await
    }
}

impl<S> FromRequestParts<AppState<S>> for CollectionHandle<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Path(mut params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;

        let name = params.remove(COLLECTION_PARAM).ok_or(RestError::NotFound)?;

        Ok(CollectionHandle::new(name, state.storage_arc()))
    }
}
