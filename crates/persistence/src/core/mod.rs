//! Core storage traits and abstractions.
//!
//! - [`DocumentStore`] - Collection-scoped CRUD over schema-less documents
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use docrest_persistence::core::DocumentStore;
//!
//! struct MyBackend { /* ... */ }
//!
//! #[async_trait]
//! impl DocumentStore for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     // find, insert_one, update_one, delete_one ...
//! }
//! ```

mod storage;

pub use storage::DocumentStore;
