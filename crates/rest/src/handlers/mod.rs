//! HTTP request handlers.
//!
//! - [`list`] - List every document in a collection
//! - [`create`] - Insert a document
//! - [`update`] - Update a document by identifier
//! - [`delete`] - Delete a document by identifier
//! - [`search`] - Free-text search over the search collection
//! - [`fallback`] - 404 for everything else

pub mod create;
pub mod delete;
pub mod fallback;
pub mod list;
pub mod search;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::not_found_handler;
pub use list::list_handler;
pub use search::search_handler;
pub use update::update_handler;
