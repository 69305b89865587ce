//! API Handlers
//!
//! HTTP request handlers for the inventory endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheStore;
use crate::clock::Clock;
use crate::error::Result;
use crate::inventory::{InventoryService, Item, KeyValueItemCache, MemoryCollection};
use crate::models::{CreateItemResponse, GetItemResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside service over both stores
    pub inventory: InventoryService,
    /// Cache engine, shared with the cleanup task
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Wires an existing service to the cache engine it writes through.
    pub fn new(inventory: InventoryService, cache: Arc<RwLock<CacheStore>>) -> Self {
        Self { inventory, cache }
    }

    /// Builds the in-process cache engine and document collection.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        let cache = Arc::new(RwLock::new(CacheStore::new(clock)));
        let inventory = InventoryService::new(
            Arc::new(KeyValueItemCache::new(cache.clone())),
            Arc::new(MemoryCollection::new()),
        );
        Self::new(inventory, cache)
    }
}

/// Handler for POST /items/
///
/// Stores a new item and caches it.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> Result<Json<CreateItemResponse>> {
    let item = state.inventory.add_item(item).await?;

    Ok(Json(CreateItemResponse::new(item)))
}

/// Handler for GET /items/:item_id
///
/// Serves the item from the cache, or from the store on a miss.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<GetItemResponse>> {
    let lookup = state.inventory.get_item(item_id).await?;

    Ok(Json(lookup.into()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stored_items = state.inventory.stored_items().await?;
    let stats = state.cache.read().await.stats();

    Ok(Json(StatsResponse::new(&stats, stored_items)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::InventoryError;
    use crate::inventory::Source;

    fn test_state() -> AppState {
        AppState::in_memory(Arc::new(ManualClock::new(1_700_000_000_000)))
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let created = create_item_handler(
            State(state.clone()),
            Json(Item::new(1).with_field("name", "bolt")),
        )
        .await
        .unwrap();
        assert_eq!(created.message, "Item added successfully");
        assert!(created.item.id.is_some());

        let response = get_item_handler(State(state), Path(1)).await.unwrap();
        assert_eq!(response.source, Source::Cache);
        assert_eq!(response.item, created.item);
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        let state = test_state();

        let result = get_item_handler(State(state), Path(999)).await;
        assert!(matches!(result, Err(InventoryError::ItemNotFound(999))));
    }

    #[tokio::test]
    async fn test_create_duplicate_handler() {
        let state = test_state();

        let first = create_item_handler(State(state.clone()), Json(Item::new(1)))
            .await
            .unwrap();
        assert_eq!(first.item.item_id, 1);
        let result = create_item_handler(State(state), Json(Item::new(1))).await;

        assert!(matches!(result, Err(InventoryError::DuplicateItem(1))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        let created = create_item_handler(State(state.clone()), Json(Item::new(1)))
            .await
            .unwrap();
        let read = get_item_handler(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(read.item, created.item);

        let response = stats_handler(State(state)).await.unwrap();
        assert_eq!(response.cache_hits, 1);
        assert_eq!(response.cache_misses, 0);
        assert_eq!(response.cache_entries, 1);
        assert_eq!(response.stored_items, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
