//! Write acknowledgement types.
//!
//! Every mutating store call reports what it did as a value. A write that
//! matched nothing is an ordinary outcome with a zero count, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DocumentId;

/// Acknowledgement returned by an insert.
///
/// Serialises as `{"acknowledged": true, "insertedId": <id>}`. The id is the
/// document's `_id` as stored: the hex string of a store-assigned
/// [`DocumentId`], or whatever value the client supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// The `_id` of the inserted document.
    pub inserted_id: Value,
}

impl InsertAck {
    /// Creates an acknowledged insert result.
    pub fn new(inserted_id: impl Into<Value>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }

    /// Returns the inserted id as a [`DocumentId`], if it is one.
    pub fn document_id(&self) -> Option<DocumentId> {
        self.inserted_id
            .as_str()
            .and_then(|s| DocumentId::parse(s).ok())
    }
}

/// Result of a single-document update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    /// Number of documents whose identifier matched (0 or 1).
    pub matched_count: u64,
    /// Number of documents actually changed (0 or 1).
    pub modified_count: u64,
}

impl UpdateOutcome {
    /// Outcome for an update that matched no document.
    pub fn no_match() -> Self {
        Self::default()
    }
}

/// Result of a single-document delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    /// Number of documents removed (0 or 1).
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_ack_wire_format() {
        let id = DocumentId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
        let json = serde_json::to_value(InsertAck::new(id)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "acknowledged": true,
                "insertedId": "65f1a2b3c4d5e6f708192a3b"
            })
        );
    }

    #[test]
    fn test_insert_ack_with_client_id() {
        let ack = InsertAck::new("my-own-id");
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            serde_json::json!({"acknowledged": true, "insertedId": "my-own-id"})
        );
        assert!(ack.document_id().is_none());

        let ack = InsertAck::new(42);
        assert_eq!(ack.inserted_id, serde_json::json!(42));
    }

    #[test]
    fn test_document_id_round_trip() {
        let id = DocumentId::new();
        assert_eq!(InsertAck::new(id).document_id(), Some(id));
    }

    #[test]
    fn test_no_match_is_zero() {
        let outcome = UpdateOutcome::no_match();
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.modified_count, 0);
    }
}
