//! Core document storage trait.
//!
//! This module defines the [`DocumentStore`] trait, which provides
//! collection-scoped CRUD operations over schema-less documents.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageResult;
use crate::filter::Filter;
use crate::types::{DeleteOutcome, Document, DocumentId, InsertAck, UpdateOutcome};

/// Core storage trait for document collections.
///
/// Collections are addressed by name and created implicitly by the first
/// insert. Every operation is independent: there are no transactions and
/// concurrent writes to the same document race, with the last committed
/// write winning.
///
/// # Identifiers
///
/// A document inserted without an `_id` gets a fresh [`DocumentId`], exposed
/// in the `_id` field as a 24-character hex string. A client-supplied `_id`
/// is stored as given and must be unique within the collection. Updates and
/// deletes address documents by [`DocumentId`].
///
/// # Misses
///
/// An update or delete that matches no document is not an error. It returns
/// an outcome with a zero count, leaving the caller to decide how to report
/// it.
///
/// # Example
///
/// ```
/// use docrest_persistence::backends::memory::MemoryBackend;
/// use docrest_persistence::core::DocumentStore;
/// use docrest_persistence::filter::Filter;
/// use serde_json::json;
///
/// # tokio_test::block_on(async {
/// let store = MemoryBackend::new();
///
/// let doc = json!({"subject": "Math", "price": 20});
/// let ack = store
///     .insert_one("products", doc.as_object().unwrap().clone())
///     .await
///     .unwrap();
///
/// let id = ack.document_id().unwrap();
/// let found = store.find("products", &Filter::id(id)).await.unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0]["subject"], "Math");
/// # });
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every document in `collection` that satisfies `filter`.
    ///
    /// An unknown collection yields an empty vector. Order is the store's
    /// natural order.
    ///
    /// # Errors
    ///
    /// * `BackendError::InvalidPattern` - If a pattern in the filter is not a
    ///   valid regular expression
    /// * `BackendError::QueryFailed` - If the backend rejects the query
    async fn find(&self, collection: &str, filter: &Filter) -> StorageResult<Vec<Value>>;

    /// Inserts one document and returns its `_id`.
    ///
    /// An `_id` present in `document` is kept; otherwise the store assigns
    /// one.
    ///
    /// # Errors
    ///
    /// * `DocumentError::AlreadyExists` - If the collection already holds a
    ///   document with the same `_id`
    async fn insert_one(&self, collection: &str, document: Document)
    -> StorageResult<InsertAck>;

    /// Overwrites the top-level fields present in `fields` on the document
    /// with identifier `id`.
    ///
    /// Fields absent from `fields` are left untouched. No document is created
    /// when nothing matches.
    ///
    /// # Errors
    ///
    /// * `DocumentError::ImmutableField` - If `fields` carries an `_id` that
    ///   differs from the matched document's
    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Document,
    ) -> StorageResult<UpdateOutcome>;

    /// Removes the document with identifier `id`.
    async fn delete_one(&self, collection: &str, id: &DocumentId)
    -> StorageResult<DeleteOutcome>;
}
