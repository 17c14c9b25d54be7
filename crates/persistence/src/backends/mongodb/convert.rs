//! Conversions between JSON documents, filters and BSON.

use bson::oid::ObjectId;
use bson::{Bson, Document as BsonDocument, doc};
use serde_json::Value;

use crate::error::{BackendError, StorageResult};
use crate::filter::Filter;
use crate::types::Document;

/// Translates a filter into a MongoDB query document.
pub(super) fn filter_to_bson(filter: &Filter) -> StorageResult<BsonDocument> {
    let query = match filter {
        Filter::All => BsonDocument::new(),
        // Every stored document has an `_id`.
        Filter::Nothing => doc! { "_id": { "$exists": false } },
        Filter::Or { branches } if branches.is_empty() => filter_to_bson(&Filter::Nothing)?,
        Filter::Or { branches } => {
            let clauses = branches
                .iter()
                .map(|branch| filter_to_bson(branch).map(Bson::Document))
                .collect::<StorageResult<Vec<_>>>()?;
            doc! { "$or": clauses }
        }
        Filter::Pattern { field, pattern } => {
            let mut query = BsonDocument::new();
            query.insert(field.as_str(), doc! { "$regex": pattern.as_str(), "$options": "i" });
            query
        }
        Filter::Eq { field, value } => {
            let mut query = BsonDocument::new();
            query.insert(field.as_str(), json_to_bson(value)?);
            query
        }
        Filter::IdEq { id } => doc! { "_id": ObjectId::from(*id) },
    };
    Ok(query)
}

/// Converts a JSON value into BSON.
pub(super) fn json_to_bson(value: &Value) -> StorageResult<Bson> {
    bson::to_bson(value).map_err(|e| {
        BackendError::SerializationError {
            message: e.to_string(),
        }
        .into()
    })
}

/// Converts a JSON document into a BSON document, field by field.
pub(super) fn document_to_bson(document: &Document) -> StorageResult<BsonDocument> {
    let mut out = BsonDocument::new();
    for (key, value) in document {
        out.insert(key.as_str(), json_to_bson(value)?);
    }
    Ok(out)
}

/// Converts a stored BSON document into its JSON wire form.
///
/// Object ids become their 24-character hex string; everything else uses
/// relaxed extended JSON.
pub(super) fn bson_to_json(document: BsonDocument) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_value_to_json(value)))
            .collect(),
    )
}

/// Converts one BSON value into JSON, rendering object ids as hex.
pub(super) fn bson_value_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(inner) => bson_to_json(inner),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_value_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
