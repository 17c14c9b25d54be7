//! docrest Persistence Layer
//!
//! This crate provides the document store abstraction behind the docrest
//! collection API: named collections of schema-less JSON documents with
//! store-assigned identifiers.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! docrest-persistence = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! Available backend features:
//! - in-memory (always available)
//! - `mongodb` - MongoDB via the official async driver
//!
//! # Architecture
//!
//! - [`types`] - Documents, identifiers and write acknowledgements
//! - [`filter`] - Query predicates evaluated by a backend
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`DocumentStore`] trait
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use docrest_persistence::backends::memory::MemoryBackend;
//! use docrest_persistence::{DocumentStore, Filter};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let store = MemoryBackend::new();
//!
//! let doc = json!({"subject": "Math", "location": "NYC", "price": 20});
//! let ack = store
//!     .insert_one("products", doc.as_object().unwrap().clone())
//!     .await
//!     .unwrap();
//!
//! let update = json!({"price": 25});
//! let outcome = store
//!     .update_one("products", &ack.document_id().unwrap(), update.as_object().unwrap().clone())
//!     .await
//!     .unwrap();
//! assert_eq!(outcome.matched_count, 1);
//!
//! let found = store
//!     .find("products", &Filter::pattern("subject", "MATH"))
//!     .await
//!     .unwrap();
//! assert_eq!(found[0]["price"], 25);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod filter;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BackendError, DocumentError, StorageError, StorageResult};
pub use filter::Filter;
pub use types::{DeleteOutcome, Document, DocumentId, InsertAck, UpdateOutcome};

// Re-export core traits
pub use core::DocumentStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
