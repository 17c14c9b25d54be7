//! Server configuration for the docrest collection API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DOCREST_PORT` | 3000 | Server port |
//! | `DOCREST_HOST` | 127.0.0.1 | Host to bind |
//! | `DOCREST_LOG_LEVEL` | info | Log level |
//! | `DOCREST_ENABLE_CORS` | true | Enable CORS |
//! | `DOCREST_CORS_ORIGINS` | * | Allowed origins |
//! | `DOCREST_STATIC_DIR` | static/images | Directory served under `/images` |
//! | `DOCREST_STORAGE_BACKEND` | memory | `memory` or `mongodb` |
//! | `DOCREST_SEARCH_COLLECTION` | products | Collection queried by `/search` |
//! | `DOCREST_SEARCH_TEXT_FIELDS` | subject,location | Fields matched by pattern |
//! | `DOCREST_SEARCH_NUMERIC_FIELDS` | price,availability | Fields matched by integer |
//! | `DOCREST_DB_PREFIX` | mongodb+srv:// | Connection string scheme |
//! | `DOCREST_DB_USER` | | Database user |
//! | `DOCREST_DB_PASSWORD` | | Database password |
//! | `DOCREST_DB_HOST` | | Host part, e.g. `@cluster0.example.net/` |
//! | `DOCREST_DB_NAME` | | Database name |
//! | `DOCREST_DB_PARAMS` | | Query string appended to the connection string |
//!
//! # Example
//!
//! ```rust
//! use docrest_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 8080,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:8080");
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;

/// Which store implementation the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackendMode {
    /// Process-local storage; data is lost on exit.
    #[default]
    Memory,
    /// MongoDB deployment addressed by the `DOCREST_DB_*` settings.
    MongoDb,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Memory => write!(f, "memory"),
            StorageBackendMode::MongoDb => write!(f, "mongodb"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackendMode::Memory),
            "mongodb" | "mongo" => Ok(StorageBackendMode::MongoDb),
            other => Err(format!(
                "unknown storage backend '{}', expected 'memory' or 'mongodb'",
                other
            )),
        }
    }
}

/// Server configuration for the docrest collection API.
#[derive(Debug, Clone, Parser)]
#[command(name = "docrest")]
#[command(about = "REST API over document collections")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "DOCREST_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "DOCREST_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "DOCREST_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Enable CORS.
    #[arg(long, env = "DOCREST_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "DOCREST_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Directory whose files are served under `/images`.
    #[arg(long, env = "DOCREST_STATIC_DIR", default_value = "static/images")]
    pub static_dir: String,

    /// Storage backend (memory, mongodb).
    #[arg(long, env = "DOCREST_STORAGE_BACKEND", default_value = "memory")]
    pub storage_backend: String,

    /// Collection queried by the search endpoint.
    #[arg(long, env = "DOCREST_SEARCH_COLLECTION", default_value = "products")]
    pub search_collection: String,

    /// Fields matched against the query as a case-insensitive pattern.
    #[arg(
        long,
        env = "DOCREST_SEARCH_TEXT_FIELDS",
        default_value = "subject,location"
    )]
    pub search_text_fields: String,

    /// Fields matched against the query parsed as an integer.
    #[arg(
        long,
        env = "DOCREST_SEARCH_NUMERIC_FIELDS",
        default_value = "price,availability"
    )]
    pub search_numeric_fields: String,

    /// Connection string scheme.
    #[arg(long, env = "DOCREST_DB_PREFIX", default_value = "mongodb+srv://")]
    pub db_prefix: String,

    /// Database user.
    #[arg(long, env = "DOCREST_DB_USER")]
    pub db_user: Option<String>,

    /// Database password.
    #[arg(long, env = "DOCREST_DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Host part of the connection string, starting with `@`.
    #[arg(long, env = "DOCREST_DB_HOST")]
    pub db_host: Option<String>,

    /// Database name.
    #[arg(long, env = "DOCREST_DB_NAME")]
    pub db_name: Option<String>,

    /// Query string appended to the connection string.
    #[arg(long, env = "DOCREST_DB_PARAMS", default_value = "")]
    pub db_params: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            enable_cors: true,
            cors_origins: "*".to_string(),
            static_dir: "static/images".to_string(),
            storage_backend: "memory".to_string(),
            search_collection: "products".to_string(),
            search_text_fields: "subject,location".to_string(),
            search_numeric_fields: "price,availability".to_string(),
            db_prefix: "mongodb+srv://".to_string(),
            db_user: None,
            db_password: None,
            db_host: None,
            db_name: None,
            db_params: String::new(),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Percent-encodes a URI component. Spaces become `%20`, not `+`.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["docrest"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage_backend.parse()
    }

    /// Returns the fields matched by pattern in search.
    pub fn text_fields(&self) -> Vec<String> {
        split_list(&self.search_text_fields)
    }

    /// Returns the fields matched by integer equality in search.
    pub fn numeric_fields(&self) -> Vec<String> {
        split_list(&self.search_numeric_fields)
    }

    /// Assembles the database connection string.
    ///
    /// The result is `prefix + user + ":" + password + host + params` with the
    /// user and password percent-encoded. Returns `None` when a credential or
    /// the host is missing.
    pub fn connection_uri(&self) -> Option<String> {
        let user = self.db_user.as_deref()?;
        let password = self.db_password.as_deref()?;
        let host = self.db_host.as_deref()?;

        Some(format!(
            "{}{}:{}{}{}",
            self.db_prefix,
            encode_component(user),
            encode_component(password),
            host,
            self.db_params
        ))
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.text_fields().is_empty() {
            errors.push("At least one search text field is required".to_string());
        }

        if self.search_collection.trim().is_empty() {
            errors.push("Search collection cannot be empty".to_string());
        }

        match self.storage_backend_mode() {
            Ok(StorageBackendMode::Memory) => {}
            Ok(StorageBackendMode::MongoDb) => {
                let required = [
                    ("DOCREST_DB_USER", &self.db_user),
                    ("DOCREST_DB_PASSWORD", &self.db_password),
                    ("DOCREST_DB_HOST", &self.db_host),
                    ("DOCREST_DB_NAME", &self.db_name),
                ];
                for (name, value) in required {
                    if value.as_deref().is_none_or(str::is_empty) {
                        errors.push(format!("{} is required for the mongodb backend", name));
                    }
                }
            }
            Err(e) => errors.push(e),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            enable_cors: false,
            ..Default::default()
        }
    }
}
