//! Database backend implementations.
//!
//! This module contains implementations of [`DocumentStore`](crate::core::DocumentStore)
//! for the supported backends.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | (always) | Process-local maps, used for development and tests |
//! | MongoDB | `mongodb` | Document store accessed through the official driver |
//!
//! # Example
//!
//! ```no_run
//! use docrest_persistence::backends::memory::MemoryBackend;
//!
//! let backend = MemoryBackend::new();
//! ```

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
