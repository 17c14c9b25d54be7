//! # docrest-rest - REST API over document collections
//!
//! This crate exposes named collections of a document store over HTTP:
//! list, insert, update and delete on any collection, plus a free-text
//! search endpoint over one configured collection.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docrest_persistence::backends::memory::MemoryBackend;
//! use docrest_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(MemoryBackend::new(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Response |
//! |-----------|-------------|-------------|----------|
//! | list | GET | `/collections/{name}` | JSON array |
//! | create | POST | `/collections/{name}` | `{"acknowledged": true, "insertedId": "..."}` |
//! | update | PUT | `/collections/{name}/{id}` | `{"msg": "success"}` or `{"msg": "error"}` |
//! | delete | DELETE | `/collections/{name}/{id}` | `{"msg": "success"}` or `{"msg": "error"}` |
//! | search | GET | `/search?query=...` | JSON array |
//! | images | GET | `/images/{file}` | file bytes |
//!
//! ## Error Handling
//!
//! | HTTP Status | Body | Cause |
//! |-------------|------|-------|
//! | 400 | message | Request body is not a JSON object |
//! | 404 | `Resource not found!` | No route or file matched |
//! | 500 | `Internal Server Error` | Malformed id, duplicate or changed `_id`, or store failure |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`extractors`] - Collection handle and JSON body extractors
//! - [`handlers`] - HTTP request handlers
//! - [`responses`] - Response payloads
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use docrest_persistence::core::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// The storage backend is moved into shared state once; every request uses
/// the same instance.
///
/// # Example
///
/// ```rust
/// use docrest_persistence::backends::memory::MemoryBackend;
/// use docrest_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     enable_cors: false,
///     static_dir: "./public/images".to_string(),
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application around an already shared storage backend.
///
/// Useful when the caller keeps its own handle on the store.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    info!(
        backend = storage.backend_name(),
        static_dir = %config.static_dir,
        search_collection = %config.search_collection,
        "Creating REST API server"
    );

    let state = AppState::new(storage, config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "docrest={level},docrest_rest={level},docrest_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
