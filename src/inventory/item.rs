//! Item Model
//!
//! An inventory record: a caller-assigned `item_id`, the store-assigned
//! `_id` once persisted, and any other fields the caller sent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

// == Document Id ==
/// Opaque identifier assigned by the document collection.
///
/// Twelve raw bytes: a big-endian seconds timestamp followed by a
/// big-endian sequence number. Its text form is 24 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// Builds an id from its timestamp and sequence parts.
    pub fn new(timestamp_secs: u32, sequence: u64) -> Self {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&timestamp_secs.to_be_bytes());
        bytes[4..].copy_from_slice(&sequence.to_be_bytes());
        Self(bytes)
    }

    /// Seconds timestamp embedded in the id.
    pub fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for DocumentId {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        if s.len() != 24 || !s.is_ascii() {
            return Err(StoreError::InvalidEntry(format!(
                "Document id must be 24 hex characters, got {s:?}"
            )));
        }

        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| {
                StoreError::InvalidEntry(format!("Document id is not hex: {s:?}"))
            })?;
        }
        Ok(Self(bytes))
    }
}

// == Item ==
/// An inventory item as seen by callers, cache entries and responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-assigned unique identifier
    pub item_id: i64,
    /// Store-assigned identifier in text form, present once persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Every other field of the document
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Creates an item with no extra fields.
    pub fn new(item_id: i64) -> Self {
        Self {
            item_id,
            id: None,
            fields: Map::new(),
        }
    }

    /// Adds one extra field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Encodes the item as the JSON text stored in a cache entry.
    pub fn to_cache_payload(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Size of the cache payload this item will have once the store has
    /// assigned its `_id`.
    pub fn persisted_payload_len(&self) -> StoreResult<usize> {
        let mut snapshot = self.clone();
        snapshot.id = Some(DocumentId::new(0, 0).to_string());
        Ok(serde_json::to_vec(&snapshot)?.len())
    }

    /// Decodes a cache entry back into an item.
    pub fn from_cache_payload(payload: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

// == Document ==
/// An item as held by the durable store, with its native id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    /// Stored body; its `id` field is always `None`
    pub item: Item,
}

impl Document {
    /// Converts to the public item form with `_id` stringified.
    pub fn into_item(self) -> Item {
        let mut item = self.item;
        item.id = Some(self.id.to_string());
        item
    }
}
