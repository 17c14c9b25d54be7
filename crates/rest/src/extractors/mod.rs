//! Axum extractors for collection requests.
//!
//! - [`CollectionHandle`] - Store handle bound to the `{collection_name}` path parameter
//! - [`JsonDocument`] - JSON object request body

mod collection;
mod document;

pub use collection::{COLLECTION_PARAM, CollectionHandle};
pub use document::{JsonDocument, JsonDocumentRejection};
