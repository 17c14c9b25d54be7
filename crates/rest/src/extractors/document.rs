//! JSON document extractor.
//!
//! Extracts a schema-less JSON object from the request body.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use docrest_persistence::types::Document;
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for a JSON object body.
///
/// Only bodies sent as `application/json` (or a `+json` subtype) are parsed.
/// Any other or missing content type, and an empty JSON body, read as `{}`.
///
/// # Example
///
/// ```rust,ignore
/// use docrest_rest::extractors::JsonDocument;
///
/// async fn create_handler(JsonDocument(doc): JsonDocument) {
///     println!("{} fields", doc.len());
/// }
/// ```
#[derive(Debug)]
pub struct JsonDocument(pub Document);

impl JsonDocument {
    /// Consumes the extractor and returns the document.
    pub fn into_inner(self) -> Document {
        self.0
    }
}

/// Error type for document extraction failures.
#[derive(Debug)]
pub enum JsonDocumentRejection {
    /// The body could not be read.
    BodyUnreadable(String),
    /// JSON parsing failed.
    InvalidJson(String),
    /// The body is JSON but not an object.
    NotAnObject,
}

impl IntoResponse for JsonDocumentRejection {
    fn into_response(self) -> Response {
        let error = match self {
            JsonDocumentRejection::BodyUnreadable(msg) => RestError::BadRequest {
                message: format!("Failed to read request body: {}", msg),
            },
            JsonDocumentRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            JsonDocumentRejection::NotAnObject => RestError::BadRequest {
                message: "Request body must be a JSON object".to_string(),
            },
        };
        error.into_response()
    }
}

/// Returns `true` if the request declares a JSON body.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

/// Parses a request body into a document.
fn parse_document(bytes: &[u8]) -> Result<Document, JsonDocumentRejection> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::new());
    }

    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JsonDocumentRejection::NotAnObject),
        Err(e) => Err(JsonDocumentRejection::InvalidJson(e.to_string())),
    }
}

impl<S> FromRequest<S> for JsonDocument
where
    S: Send + Sync,
{
    type Rejection = JsonDocumentRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(JsonDocument(Document::new()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonDocumentRejection::BodyUnreadable(e.to_string()))?;

        parse_document(&bytes).map(JsonDocument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object() {
        let doc = parse_document(br#"{"subject": "Math", "price": 20}"#).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["price"], 20);
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert!(parse_document(b"").unwrap().is_empty());
        assert!(parse_document(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(
            parse_document(b"[1, 2]"),
            Err(JsonDocumentRejection::NotAnObject)
        ));
        assert!(matches!(
            parse_document(b"\"text\""),
            Err(JsonDocumentRejection::NotAnObject)
        ));
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(
            parse_document(b"{not json"),
            Err(JsonDocumentRejection::InvalidJson(_))
        ));
    }

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, content_type.parse().unwrap());
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
        assert!(is_json_content_type(&headers_with("application/merge-patch+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_content_type(&HeaderMap::new()));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
        assert!(!is_json_content_type(&headers_with("not a mime")));
    }

    #[tokio::test]
    async fn test_non_json_body_is_empty_document() {
        let req = axum::http::Request::builder()
            .header(header::CONTENT_TYPE, "text/plain")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let JsonDocument(doc) = JsonDocument::from_request(req, &()).await.unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn test_json_body_is_parsed() {
        let req = axum::http::Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(r#"{"price": 20}"#))
            .unwrap();

        let JsonDocument(doc) = JsonDocument::from_request(req, &()).await.unwrap();
        assert_eq!(doc["price"], 20);
    }

    #[test]
    fn test_into_inner() {
        let doc = JsonDocument(Document::new());
        assert!(doc.into_inner().is_empty());
    }
}
