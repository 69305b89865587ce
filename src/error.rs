//! Error types for the inventory service
//!
//! Two layers: [`StoreError`] for failures inside the backing stores and
//! [`InventoryError`] for what the HTTP caller sees.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failure reported by the cache engine or the document collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend could not serve the call
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Payload could not be encoded or decoded
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unique index on `item_id` rejected the insert
    #[error("Duplicate key: item_id {0}")]
    DuplicateKey(i64),

    /// Key or value rejected by the cache engine
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}

// == Inventory Error Enum ==
/// Domain error returned by the inventory service.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Create requested for an `item_id` already in the durable store
    #[error("Item with id {0} already exists")]
    DuplicateItem(i64),

    /// Read requested for an `item_id` present in neither layer
    #[error("Item not found")]
    ItemNotFound(i64),

    /// Encoded item would not fit in a cache entry
    #[error("Item {item_id} encodes to {size} bytes, cache entries are limited to {limit}")]
    ItemTooLarge { item_id: i64, size: usize, limit: usize },

    /// Either backing store failed
    #[error("Backing store unavailable: {0}")]
    BackingStoreUnavailable(String),
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(item_id) => InventoryError::DuplicateItem(item_id),
            other => InventoryError::BackingStoreUnavailable(other.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = match &self {
            InventoryError::DuplicateItem(_) => StatusCode::BAD_REQUEST,
            InventoryError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::ItemTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            InventoryError::BackingStoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Aliases ==
/// Convenience Result type for the inventory service.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Result type for backing-store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
