//! Route configuration for the docrest API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod collection_routes;

pub use collection_routes::create_routes;
