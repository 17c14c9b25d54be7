//! A store whose every operation fails.

use async_trait::async_trait;
use docrest_persistence::core::DocumentStore;
use docrest_persistence::error::{BackendError, StorageError, StorageResult};
use docrest_persistence::filter::Filter;
use docrest_persistence::types::{DeleteOutcome, Document, DocumentId, InsertAck, UpdateOutcome};
use serde_json::Value;

/// Store that reports a lost connection for every call.
#[derive(Debug, Default)]
pub struct FailingStore;

fn unavailable() -> StorageError {
    StorageError::Backend(BackendError::ConnectionFailed {
        backend_name: "failing".to_string(),
        message: "connection refused".to_string(),
    })
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn find(&self, _collection: &str, _filter: &Filter) -> StorageResult<Vec<Value>> {
        Err(unavailable())
    }

    async fn insert_one(
        &self,
        _collection: &str,
        _document: Document,
    ) -> StorageResult<InsertAck> {
        Err(unavailable())
    }

    async fn update_one(
        &self,
        _collection: &str,
        _id: &DocumentId,
        _fields: Document,
    ) -> StorageResult<UpdateOutcome> {
        Err(unavailable())
    }

    async fn delete_one(
        &self,
        _collection: &str,
        _id: &DocumentId,
    ) -> StorageResult<DeleteOutcome> {
        Err(unavailable())
    }
}
