//! DocumentStore implementation for the MongoDB backend.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, doc};
use futures_util::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use serde_json::Value;

use crate::core::DocumentStore;
use crate::error::{BackendError, DocumentError, StorageError, StorageResult};
use crate::filter::Filter;
use crate::types::{DeleteOutcome, Document, DocumentId, ID_FIELD, InsertAck, UpdateOutcome};

use super::MongoBackend;
use super::convert::{bson_to_json, bson_value_to_json, document_to_bson, filter_to_bson};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn insert_failed(
    collection: &str,
    document: &Document,
    err: mongodb::error::Error,
) -> StorageError {
    if is_duplicate_key(&err) {
        let id = document
            .get(ID_FIELD)
            .map(|v| v.as_str().map_or_else(|| v.to_string(), String::from))
            .unwrap_or_default();
        return DocumentError::AlreadyExists {
            collection: collection.to_string(),
            id,
        }
        .into();
    }
    query_failed(collection, err)
}

fn query_failed(collection: &str, err: mongodb::error::Error) -> StorageError {
    StorageError::Backend(BackendError::QueryFailed {
        backend_name: "mongodb".to_string(),
        collection: collection.to_string(),
        message: err.to_string(),
    })
}

#[async_trait]
impl DocumentStore for MongoBackend {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn find(&self, collection: &str, filter: &Filter) -> StorageResult<Vec<Value>> {
        let query = filter_to_bson(filter)?;
        let docs: Vec<bson::Document> = self
            .collection(collection)
            .find(query)
            .await
            .map_err(|e| query_failed(collection, e))?
            .try_collect()
            .await
            .map_err(|e| query_failed(collection, e))?;

        Ok(docs.into_iter().map(bson_to_json).collect())
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> StorageResult<InsertAck> {
        let mut stored = document_to_bson(&document)?;
        if !stored.contains_key(ID_FIELD) {
            stored.insert(ID_FIELD, ObjectId::from(DocumentId::new()));
        }

        let result = self
            .collection(collection)
            .insert_one(stored)
            .await
            .map_err(|e| insert_failed(collection, &document, e))?;

        Ok(InsertAck::new(bson_value_to_json(result.inserted_id)))
    }

    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Document,
    ) -> StorageResult<UpdateOutcome> {
        let mut set = document_to_bson(&fields)?;
        match set.get(ID_FIELD) {
            None => {}
            Some(Bson::String(value)) if *value == id.to_hex() => {
                set.remove(ID_FIELD);
            }
            Some(_) => {
                return Err(DocumentError::ImmutableField {
                    collection: collection.to_string(),
                    id: id.to_hex(),
                    field: ID_FIELD.to_string(),
                }
                .into());
            }
        }

        if set.is_empty() {
            // `$set` rejects an empty document; report whether the id exists.
            let matched = self
                .collection(collection)
                .count_documents(filter_to_bson(&Filter::id(*id))?)
                .await
                .map_err(|e| query_failed(collection, e))?;
            return Ok(UpdateOutcome {
                matched_count: matched.min(1),
                modified_count: 0,
            });
        }

        let result = self
            .collection(collection)
            .update_one(filter_to_bson(&Filter::id(*id))?, doc! { "$set": set })
            .await
            .map_err(|e| query_failed(collection, e))?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> StorageResult<DeleteOutcome> {
        let result = self
            .collection(collection)
            .delete_one(filter_to_bson(&Filter::id(*id))?)
            .await
            .map_err(|e| query_failed(collection, e))?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
