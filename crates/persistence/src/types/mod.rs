//! Core types for the persistence layer.
//!
//! - [`Document`] - A schema-less JSON object
//! - [`DocumentId`] - Store-assigned identifier (24 hex characters)
//! - [`InsertAck`], [`UpdateOutcome`], [`DeleteOutcome`] - Write acknowledgements
//!
//! # Examples
//!
//! ```
//! use docrest_persistence::types::{DocumentId, InsertAck};
//!
//! let ack = InsertAck::new(DocumentId::new());
//! assert!(ack.acknowledged);
//! ```

mod document_id;
mod outcome;

pub use document_id::{DOCUMENT_ID_LEN, DocumentId, ID_FIELD};
pub use outcome::{DeleteOutcome, InsertAck, UpdateOutcome};

/// A schema-less document: any mapping of field names to JSON values.
pub type Document = serde_json::Map<String, serde_json::Value>;
