//! docrest server
//!
//! Serves named document collections over HTTP from an in-memory store or
//! a MongoDB database.

use clap::Parser;
use docrest_persistence::backends::memory::MemoryBackend;
use docrest_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        search_collection = %config.search_collection,
        "Starting docrest server"
    );

    match backend_mode {
        StorageBackendMode::Memory => start_memory(config).await?,
        StorageBackendMode::MongoDb => start_mongodb(config).await?,
    }

    Ok(())
}

/// Starts the server over a process-local store.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    info!("Using in-memory storage; data is lost on shutdown");
    let app = create_app_with_config(MemoryBackend::new(), config.clone());
    serve(app, &config).await
}

/// Starts the server over a MongoDB database.
#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    use docrest_persistence::backends::mongodb::{MongoBackend, MongoBackendConfig};
    use tracing::warn;

    let uri = config
        .connection_uri()
        .ok_or_else(|| anyhow::anyhow!("MongoDB credentials or host are not configured"))?;
    let database = config
        .db_name
        .clone()
        .ok_or_else(|| anyhow::anyhow!("DOCREST_DB_NAME is not configured"))?;

    let backend = MongoBackend::connect(MongoBackendConfig::new(uri, database)).await?;

    // The driver connects lazily; a failed ping is reported but not fatal.
    if let Err(e) = backend.ping().await {
        warn!(error = %e, "MongoDB ping failed; requests will retry the connection");
    }

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p docrest --features mongodb"
    )
}
