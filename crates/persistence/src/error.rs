//! Error types for the persistence layer.
//!
//! Storage failures are split into three groups: identifier errors, which are
//! detected before a backend is ever contacted, document errors, which reject
//! a write that would break a stored document's identity, and backend errors,
//! which come back from the store itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The supplied document identifier is not a valid 24-character hex id.
    #[error("invalid document id '{value}': expected 24 hexadecimal characters")]
    InvalidId { value: String },

    /// Document-level errors (duplicate or immutable `_id`)
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns `true` if the error was raised before reaching the backend.
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, StorageError::InvalidId { .. })
    }
}

/// Errors for writes that conflict with a stored document's identity.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A document with the same `_id` already exists in the collection.
    #[error("document already exists: {collection}/{id}")]
    AlreadyExists { collection: String, id: String },

    /// An update tried to change an immutable field.
    #[error("field '{field}' of {collection}/{id} is immutable")]
    ImmutableField {
        collection: String,
        id: String,
        field: String,
    },
}

/// Errors raised by a storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Query execution error.
    #[error("query on collection '{collection}' failed in {backend_name}: {message}")]
    QueryFailed {
        backend_name: String,
        collection: String,
        message: String,
    },

    /// A search pattern could not be compiled.
    #[error("invalid search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "mongodb".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "mongodb")]
impl From<bson::ser::Error> for StorageError {
    fn from(err: bson::ser::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_display() {
        let err = StorageError::InvalidId {
            value: "xyz".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid document id 'xyz': expected 24 hexadecimal characters"
        );
        assert!(err.is_invalid_id());
    }

    #[test]
    fn test_backend_error_is_transparent() {
        let err = StorageError::from(BackendError::QueryFailed {
            backend_name: "memory".to_string(),
            collection: "products".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "query on collection 'products' failed in memory: boom"
        );
        assert!(!err.is_invalid_id());
    }

    #[test]
    fn test_document_error_display() {
        let err = StorageError::from(DocumentError::AlreadyExists {
            collection: "products".to_string(),
            id: "my-own-id".to_string(),
        });
        assert_eq!(err.to_string(), "document already exists: products/my-own-id");

        let err = StorageError::from(DocumentError::ImmutableField {
            collection: "products".to_string(),
            id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            field: "_id".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "field '_id' of products/65f1a2b3c4d5e6f708192a3b is immutable"
        );
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StorageError::from(json_err);
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::SerializationError { .. })
        ));
    }
}
