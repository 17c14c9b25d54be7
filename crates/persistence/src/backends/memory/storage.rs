//! DocumentStore implementation for the in-memory backend.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::DocumentStore;
use crate::error::{DocumentError, StorageResult};
use crate::filter::Filter;
use crate::types::{DeleteOutcome, Document, DocumentId, ID_FIELD, InsertAck, UpdateOutcome};

use super::MemoryBackend;

fn has_id(doc: &Document, id: &DocumentId) -> bool {
    doc.get(ID_FIELD).and_then(Value::as_str) == Some(id.to_hex().as_str())
}

fn id_label(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find(&self, collection: &str, filter: &Filter) -> StorageResult<Vec<Value>> {
        let compiled = filter.compile()?;

        let collections = self.collections.read();
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|doc| compiled.matches(doc))
            .map(|doc| Value::Object(doc.clone()))
            .collect())
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> StorageResult<InsertAck> {
        let id = match document.remove(ID_FIELD) {
            Some(id) => id,
            None => Value::from(DocumentId::new()),
        };

        let mut collections = self.collections.write();
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|doc| doc.get(ID_FIELD) == Some(&id)) {
            return Err(DocumentError::AlreadyExists {
                collection: collection.to_string(),
                id: id_label(&id),
            }
            .into());
        }

        let mut stored = Document::with_capacity(document.len() + 1);
        stored.insert(ID_FIELD.to_string(), id.clone());
        stored.extend(document);
        docs.push(stored);

        tracing::debug!(collection = %collection, id = %id, "Inserted document");
        Ok(InsertAck::new(id))
    }

    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Document,
    ) -> StorageResult<UpdateOutcome> {
        let mut collections = self.collections.write();
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)))
        else {
            return Ok(UpdateOutcome::no_match());
        };

        if let Some(new_id) = fields.get(ID_FIELD) {
            if doc.get(ID_FIELD) != Some(new_id) {
                return Err(DocumentError::ImmutableField {
                    collection: collection.to_string(),
                    id: id.to_hex(),
                    field: ID_FIELD.to_string(),
                }
                .into());
            }
        }

        let mut modified = false;
        for (key, value) in fields {
            if key == ID_FIELD {
                continue;
            }
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> StorageResult<DeleteOutcome> {
        let mut collections = self.collections.write();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(DeleteOutcome::default());
        };

        match docs.iter().position(|doc| has_id(doc, id)) {
            Some(index) => {
                docs.remove(index);
                Ok(DeleteOutcome { deleted_count: 1 })
            }
            None => Ok(DeleteOutcome::default()),
        }
    }
}
