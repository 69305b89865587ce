//! Response DTOs for the inventory API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::inventory::{Item, ItemLookup, Source};

/// Response body for POST /items/
#[derive(Debug, Clone, Serialize)]
pub struct CreateItemResponse {
    /// Success message
    pub message: String,
    /// The stored item, `_id` included
    pub item: Item,
}

impl CreateItemResponse {
    pub fn new(item: Item) -> Self {
        Self {
            message: "Item added successfully".to_string(),
            item,
        }
    }
}

/// Response body for GET /items/:item_id
#[derive(Debug, Clone, Serialize)]
pub struct GetItemResponse {
    /// Layer that served the read
    pub source: Source,
    pub item: Item,
}

impl From<ItemLookup> for GetItemResponse {
    fn from(lookup: ItemLookup) -> Self {
        Self {
            source: lookup.source,
            item: lookup.item,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub cache_hits: u64,
    /// Number of cache misses
    pub cache_misses: u64,
    /// Entries dropped because their TTL elapsed
    pub cache_expirations: u64,
    /// Entries currently held by the cache
    pub cache_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Documents in the durable store
    pub stored_items: usize,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, stored_items: usize) -> Self {
        Self {
            cache_hits: stats.hits,
            cache_misses: stats.misses,
            cache_expirations: stats.expirations,
            cache_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            stored_items,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
