//! In-memory backend state.

use std::collections::HashMap;
use std::fmt::Debug;

use parking_lot::RwLock;

use crate::types::Document;

/// In-memory backend for document storage.
#[derive(Default)]
pub struct MemoryBackend {
    pub(super) collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let collections = self.collections.read();
        f.debug_struct("MemoryBackend")
            .field("collections", &collections.len())
            .field(
                "documents",
                &collections.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents in a collection.
    pub fn collection_len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Returns the names of all collections that have received an insert.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }
}
