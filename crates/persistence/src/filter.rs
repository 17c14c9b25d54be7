//! Document filter expressions.
//!
//! A [`Filter`] is the predicate a backend evaluates to select documents. It
//! is built per request and never persisted. Backends that evaluate filters
//! in process (the in-memory store) first [`compile`](Filter::compile) them,
//! which turns every pattern into a case-insensitive [`Regex`] once rather
//! than once per document.
//!
//! # Matching rules
//!
//! The rules follow document-store query semantics:
//!
//! - `Pattern` matches string fields (or arrays containing a matching string)
//!   against an unanchored, case-insensitive regular expression.
//! - `Eq` compares numbers numerically, so `20` matches `20.0`; other values
//!   compare structurally. An array field matches if any element is equal.
//! - A missing field never matches `Pattern` or `Eq`.
//! - `Or` with no branches matches nothing.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BackendError, StorageResult};
use crate::types::{Document, DocumentId, ID_FIELD};

/// A predicate over documents.
///
/// # Examples
///
/// ```
/// use docrest_persistence::filter::Filter;
/// use serde_json::json;
///
/// let filter = Filter::or(vec![
///     Filter::pattern("subject", "math"),
///     Filter::eq("price", json!(20)),
/// ]);
///
/// let compiled = filter.compile().unwrap();
/// let doc = json!({"subject": "Mathematics", "price": 5});
/// assert!(compiled.matches(doc.as_object().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    /// Matches every document.
    All,

    /// Matches no document.
    Nothing,

    /// Matches if any branch matches.
    Or {
        /// The alternatives.
        branches: Vec<Filter>,
    },

    /// Case-insensitive regular-expression match on a text field.
    Pattern {
        /// Field name.
        field: String,
        /// Regular expression source.
        pattern: String,
    },

    /// Equality on a field.
    Eq {
        /// Field name.
        field: String,
        /// Value to compare against.
        value: Value,
    },

    /// Matches the document with the given identifier.
    IdEq {
        /// The identifier.
        id: DocumentId,
    },
}

impl Filter {
    /// Creates a disjunction.
    pub fn or(branches: Vec<Filter>) -> Self {
        Filter::Or { branches }
    }

    /// Creates a case-insensitive pattern filter.
    pub fn pattern(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Filter::Pattern {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates an equality filter.
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Filter::Eq {
            field: field.into(),
            value,
        }
    }

    /// Creates an identifier filter.
    pub fn id(id: DocumentId) -> Self {
        Filter::IdEq { id }
    }

    /// Returns `true` if this filter places no restriction on documents.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Compiles the filter for in-process evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidPattern`] if a pattern is not a valid
    /// regular expression.
    pub fn compile(&self) -> StorageResult<CompiledFilter> {
        let compiled = match self {
            Filter::All => CompiledFilter::All,
            Filter::Nothing => CompiledFilter::Nothing,
            Filter::Or { branches } => CompiledFilter::Or(
                branches
                    .iter()
                    .map(Filter::compile)
                    .collect::<StorageResult<Vec<_>>>()?,
            ),
            Filter::Pattern { field, pattern } => {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| BackendError::InvalidPattern {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })?;
                CompiledFilter::Pattern {
                    field: field.clone(),
                    regex,
                }
            }
            Filter::Eq { field, value } => CompiledFilter::Eq {
                field: field.clone(),
                value: value.clone(),
            },
            Filter::IdEq { id } => CompiledFilter::Eq {
                field: ID_FIELD.to_string(),
                value: Value::String(id.to_hex()),
            },
        };
        Ok(compiled)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

/// A filter ready for in-process evaluation.
#[derive(Debug, Clone)]
pub enum CompiledFilter {
    /// Matches every document.
    All,
    /// Matches no document.
    Nothing,
    /// Matches if any branch matches.
    Or(Vec<CompiledFilter>),
    /// Regular-expression match on a text field.
    Pattern {
        /// Field name.
        field: String,
        /// Compiled expression.
        regex: Regex,
    },
    /// Equality on a field.
    Eq {
        /// Field name.
        field: String,
        /// Value to compare against.
        value: Value,
    },
}

impl CompiledFilter {
    /// Checks whether a document satisfies this filter.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            CompiledFilter::All => true,
            CompiledFilter::Nothing => false,
            CompiledFilter::Or(branches) => branches.iter().any(|b| b.matches(doc)),
            CompiledFilter::Pattern { field, regex } => match doc.get(field) {
                Some(Value::String(s)) => regex.is_match(s),
                Some(Value::Array(items)) => items
                    .iter()
                    .any(|item| item.as_str().is_some_and(|s| regex.is_match(s))),
                _ => false,
            },
            CompiledFilter::Eq { field, value } => match doc.get(field) {
                Some(Value::Array(items)) if !value.is_array() => {
                    items.iter().any(|item| values_equal(item, value))
                }
                Some(field_value) => values_equal(field_value, value),
                None => false,
            },
        }
    }
}

/// Compares two JSON values, treating numbers by numeric value.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return a == b;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        _ => a == b,
    }
}
