//! REST API test harness.
//!
//! Provides a test server over the real router, backed by an isolated
//! in-memory store and a temporary image directory.

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use docrest_persistence::backends::memory::MemoryBackend;
use docrest_persistence::core::DocumentStore;
use docrest_persistence::types::{Document, DocumentId};
use serde_json::Value;
use tempfile::TempDir;

use docrest_rest::{ServerConfig, create_app_with_shared_storage};

/// Test harness for REST API testing.
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend behind the server.
    pub backend: Arc<MemoryBackend>,

    /// Directory served under `/images`; removed on drop.
    pub images: TempDir,
}

impl RestTestHarness {
    /// Creates a harness with the testing configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    ///
    /// `static_dir` is always replaced by a fresh temporary directory.
    pub fn with_config(config: ServerConfig) -> Self {
        let images = tempfile::tempdir().expect("Failed to create image directory");
        let config = ServerConfig {
            static_dir: images.path().to_string_lossy().into_owned(),
            ..config
        };

        let backend = Arc::new(MemoryBackend::new());
        let app = create_app_with_shared_storage(Arc::clone(&backend), config);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            images,
        }
    }

    /// Writes a file into the image directory.
    pub fn add_image(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.images.path().join(Path::new(name)), bytes)
            .expect("Failed to write image");
    }

    /// Inserts a document without an `_id` directly into the store.
    pub async fn seed(&self, collection: &str, doc: Value) -> DocumentId {
        let document: Document = match doc {
            Value::Object(map) => map,
            other => panic!("seed documents must be objects, got {other}"),
        };
        self.backend
            .insert_one(collection, document)
            .await
            .expect("Failed to seed document")
            .document_id()
            .expect("Seed documents get a store-assigned id")
    }

    /// Seeds the default search collection with three products.
    pub async fn seed_products(&self) -> Vec<DocumentId> {
        let mut ids = Vec::new();
        for product in super::fixtures::products() {
            ids.push(self.seed("products", product).await);
        }
        ids
    }
}
