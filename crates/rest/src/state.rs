//! Application state for the docrest REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the store client and the server configuration.

use std::sync::Arc;

use docrest_persistence::core::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// The store client is created once at startup and shared by every request
/// through this state; handlers never construct their own.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`DocumentStore`])
///
/// # Example
///
/// ```rust
/// use docrest_persistence::backends::memory::MemoryBackend;
/// use docrest_rest::{AppState, ServerConfig};
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());
/// assert_eq!(state.search_collection(), "products");
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,

    /// Parsed search field lists.
    text_fields: Arc<[String]>,
    numeric_fields: Arc<[String]>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
            text_fields: Arc::clone(&self.text_fields),
            numeric_fields: Arc::clone(&self.numeric_fields),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    ///
    /// # Arguments
    ///
    /// * `storage` - The storage backend (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        let text_fields = config.text_fields().into();
        let numeric_fields = config.numeric_fields().into();
        Self {
            storage,
            config: Arc::new(config),
            text_fields,
            numeric_fields,
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a clone of the storage Arc.
    pub fn storage_arc(&self) -> Arc<S> {
        Arc::clone(&self.storage)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the collection queried by the search endpoint.
    pub fn search_collection(&self) -> &str {
        &self.config.search_collection
    }

    /// Returns the fields matched by pattern in search.
    pub fn text_fields(&self) -> &[String] {
        &self.text_fields
    }

    /// Returns the fields matched by integer equality in search.
    pub fn numeric_fields(&self) -> &[String] {
        &self.numeric_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docrest_persistence::backends::memory::MemoryBackend;

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MemoryBackend::new());
        let state = AppState::new(storage, ServerConfig::default());

        assert_eq!(state.storage().backend_name(), "memory");
        assert_eq!(state.search_collection(), "products");
        assert_eq!(state.text_fields(), ["subject", "location"]);
        assert_eq!(state.numeric_fields(), ["price", "availability"]);
    }

    #[test]
    fn test_app_state_config_access() {
        let storage = Arc::new(MemoryBackend::new());
        let config = ServerConfig {
            search_collection: "lessons".to_string(),
            search_text_fields: "topic".to_string(),
            search_numeric_fields: String::new(),
            ..Default::default()
        };
        let state = AppState::new(storage, config);

        assert_eq!(state.search_collection(), "lessons");
        assert_eq!(state.text_fields(), ["topic"]);
        assert!(state.numeric_fields().is_empty());
    }

    #[test]
    fn test_app_state_clone_shares_storage() {
        let storage = Arc::new(MemoryBackend::new());
        let state = AppState::new(storage, ServerConfig::default());
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.storage_arc(), &cloned.storage_arc()));
    }
}
