//! In-memory backend implementation.
//!
//! Documents live in a map of collection name to document list, guarded by a
//! single read-write lock. The lock is taken for the duration of one
//! operation and never held across an `.await`, so concurrent requests only
//! contend on the map itself.
//!
//! This backend is the default for local runs and the one every test uses.
//! Data is lost when the process exits.
//!
//! # Example
//!
//! ```
//! use docrest_persistence::backends::memory::MemoryBackend;
//! use docrest_persistence::core::DocumentStore;
//!
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.backend_name(), "memory");
//! assert_eq!(backend.collection_len("products"), 0);
//! ```

mod backend;
mod storage;

pub use backend::MemoryBackend;
