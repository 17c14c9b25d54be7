//! Search handler.
//!
//! `GET /search?query=...`
//!
//! Runs one free-text query against the configured search collection. The
//! query is matched as a case-insensitive pattern against each text field
//! and, when it starts with an integer, compared for equality against each
//! numeric field. A document matches if any of these hold.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use docrest_persistence::core::DocumentStore;
use docrest_persistence::filter::Filter;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CollectionHandle;
use crate::state::AppState;

/// Query parameters for search.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    /// Free-text query. Absent or empty returns the whole collection.
    pub query: Option<String>,
}

/// Parses the integer at the start of `input`.
///
/// Leading whitespace and one sign are allowed, followed by decimal digits;
/// anything after the digits is ignored. Returns `None` when there are no
/// digits or the value does not fit in an `i64`.
///
/// Out-of-range digits are not rounded to a nearby float, so a query such as
/// `99999999999999999999` builds no numeric branches at all and only the text
/// fields can match it.
///
/// ```
/// use docrest_rest::handlers::search::parse_leading_int;
///
/// assert_eq!(parse_leading_int("20"), Some(20));
/// assert_eq!(parse_leading_int(" 20abc"), Some(20));
/// assert_eq!(parse_leading_int("2.9"), Some(2));
/// assert_eq!(parse_leading_int("-5"), Some(-5));
/// assert_eq!(parse_leading_int("math"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let value = if negative {
        format!("-{}", digits).parse::<i64>().ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(value)
}

/// Builds the search filter for `query`.
///
/// An empty query yields [`Filter::All`]. Otherwise each text field gets a
/// pattern branch, and each numeric field gets an equality branch, or
/// [`Filter::Nothing`] when the query does not start with an integer.
pub fn build_search_filter(
    query: &str,
    text_fields: &[String],
    numeric_fields: &[String],
) -> Filter {
    if query.is_empty() {
        return Filter::All;
    }

    let number = parse_leading_int(query);

    let mut branches: Vec<Filter> = text_fields
        .iter()
        .map(|field| Filter::pattern(field.as_str(), query))
        .collect();

    branches.extend(numeric_fields.iter().map(|field| match number {
        Some(n) => Filter::eq(field.as_str(), Value::from(n)),
        None => Filter::Nothing,
    }));

    Filter::or(branches)
}

/// Handler for the search endpoint.
///
/// # Response
///
/// - `200 OK` - JSON array of matching documents
/// - `500 Internal Server Error` - Store failure, including a query that is
///   not a valid regular expression
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<SearchParams>,
) -> RestResult<Response>
where
    S: DocumentStore + Send + Sync,
{
    let query = params.query.unwrap_or_default();

    debug!(
        collection = %state.search_collection(),
        query = %query,
        "Processing search request"
    );

    let filter = build_search_filter(&query, state.text_fields(), state.numeric_fields());
    let collection = CollectionHandle::new(state.search_collection(), state.storage_arc());
    let documents = collection.find(&filter).await?;

    debug!(
        collection = %collection.name(),
        count = documents.len(),
        "Search completed"
    );

    Ok(Json(documents).into_response())
}
