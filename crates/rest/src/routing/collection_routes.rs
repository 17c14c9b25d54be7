//! Collection route configuration.
//!
//! Defines all routes for the docrest API.

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    routing::{get, put},
};
use docrest_persistence::core::DocumentStore;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /collections/{collection_name}` - List documents
/// - `POST /collections/{collection_name}` - Insert a document
/// - `PUT /collections/{collection_name}/{id}` - Update a document
/// - `DELETE /collections/{collection_name}/{id}` - Delete a document
/// - `GET /search?query=...` - Search the search collection
/// - `GET /images/{file}` - Files from the configured static directory
///
/// Anything else, including a missing image or an unsupported method,
/// answers `404 Resource not found!`.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    let images = ServeDir::new(&state.config().static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::not_found_handler.into_service());

    Router::new()
        .route("/search", get(handlers::search_handler::<S>))
        .route(
            "/collections/{collection_name}",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/collections/{collection_name}/{id}",
            put(handlers::update_handler::<S>).delete(handlers::delete_handler::<S>),
        )
        .nest_service("/images", images)
        .method_not_allowed_fallback(handlers::not_found_handler)
        .fallback(handlers::not_found_handler)
        // State
        .with_state(state)
}
