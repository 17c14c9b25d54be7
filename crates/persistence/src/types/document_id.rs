//! Document identifier type.
//!
//! This module defines [`DocumentId`], the store-assigned identifier of a
//! document. Its wire form is the 24-character hexadecimal string used by
//! MongoDB ObjectIds, so identifiers round-trip unchanged between a list
//! response and the `{id}` path parameter of an update or delete.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{StorageError, StorageResult};

/// Number of raw bytes in a document identifier.
pub const DOCUMENT_ID_LEN: usize = 12;

/// The reserved document field holding the identifier.
pub const ID_FIELD: &str = "_id";

/// A store-assigned document identifier.
///
/// The layout follows the ObjectId convention:
///
/// - bytes 0..4: seconds since the Unix epoch (big-endian)
/// - bytes 4..9: a per-process random value
/// - bytes 9..12: an incrementing counter (big-endian)
///
/// # Examples
///
/// ```
/// use docrest_persistence::types::DocumentId;
///
/// let id = DocumentId::new();
/// let parsed = DocumentId::parse(&id.to_hex()).unwrap();
/// assert_eq!(id, parsed);
///
/// assert!(DocumentId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; DOCUMENT_ID_LEN]);

fn process_unique() -> &'static [u8; 5] {
    static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
    PROCESS_UNIQUE.get_or_init(|| {
        let random = uuid::Uuid::new_v4();
        let mut bytes = [0u8; 5];
        bytes.copy_from_slice(&random.as_bytes()[..5]);
        bytes
    })
}

fn next_counter() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| {
        let seed = uuid::Uuid::new_v4().as_u128() as u32;
        AtomicU32::new(seed & 0x00ff_ffff)
    });
    counter.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff
}

impl DocumentId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        let mut bytes = [0u8; DOCUMENT_ID_LEN];
        let seconds = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process_unique());
        bytes[9..].copy_from_slice(&next_counter().to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Builds an identifier from its raw bytes.
    pub fn from_bytes(bytes: [u8; DOCUMENT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn bytes(&self) -> [u8; DOCUMENT_ID_LEN] {
        self.0
    }

    /// Parses the 24-character hexadecimal form (either case).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidId`] for any other input.
    pub fn parse(value: &str) -> StorageResult<Self> {
        let invalid = || StorageError::InvalidId {
            value: value.to_string(),
        };

        if value.len() != DOCUMENT_ID_LEN * 2 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [0u8; DOCUMENT_ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &value[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }

    /// Returns the lowercase hexadecimal form.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Returns the creation time encoded in the identifier, in epoch seconds.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

impl From<DocumentId> for serde_json::Value {
    fn from(id: DocumentId) -> Self {
        serde_json::Value::String(id.to_hex())
    }
}

#[cfg(feature = "mongodb")]
impl From<DocumentId> for bson::oid::ObjectId {
    fn from(id: DocumentId) -> Self {
        bson::oid::ObjectId::from_bytes(id.0)
    }
}

#[cfg(feature = "mongodb")]
impl From<bson::oid::ObjectId> for DocumentId {
    fn from(oid: bson::oid::ObjectId) -> Self {
        DocumentId(oid.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let id = DocumentId::new();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 24);
        assert_eq!(DocumentId::parse(&hex).unwrap(), id);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id = DocumentId::parse("65F1A2B3C4D5E6F708192A3B").unwrap();
        assert_eq!(id.to_hex(), "65f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in [
            "",
            "123",
            "65f1a2b3c4d5e6f708192a3",
            "65f1a2b3c4d5e6f708192a3b0",
            "zzf1a2b3c4d5e6f708192a3b",
            "65f1a2b3c4d5e6f708192a+b",
            "éééééééééééé",
        ] {
            let err = DocumentId::parse(bad).unwrap_err();
            assert!(err.is_invalid_id(), "expected invalid id for {bad:?}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_is_recent() {
        let id = DocumentId::new();
        let now = Utc::now().timestamp() as u32;
        assert!(now.saturating_sub(id.timestamp()) < 5);
    }

    #[test]
    fn test_serde_as_string() {
        let id = DocumentId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("65f1a2b3c4d5e6f708192a3b"));

        let back: DocumentId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
