//! Inventory Service
//!
//! Cache-aside orchestration over the durable store and the item cache.
//!
//! Writes go to the store first and are then written through to the cache.
//! Reads try the cache, fall back to the store on a miss and populate the
//! cache from what they found.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{InventoryError, Result};
use crate::inventory::{DocumentStore, Item, ItemCache};

// == Source ==
/// Which layer satisfied a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Store,
}

/// Result of a successful read.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLookup {
    pub source: Source,
    pub item: Item,
}

// == Inventory Service ==
/// Create and read flows. Holds no state besides the two store handles.
#[derive(Clone)]
pub struct InventoryService {
    cache: Arc<dyn ItemCache>,
    store: Arc<dyn DocumentStore>,
}

impl InventoryService {
    pub fn new(cache: Arc<dyn ItemCache>, store: Arc<dyn DocumentStore>) -> Self {
        Self { cache, store }
    }

    // == Add Item ==
    /// Persists a new item and writes it through to the cache.
    ///
    /// Returns the stored item with its `_id` in text form.
    ///
    /// # Errors
    /// - [`InventoryError::DuplicateItem`] if `item_id` is already stored
    /// - [`InventoryError::ItemTooLarge`] if the item would not fit in a
    ///   cache entry; nothing is written
    /// - [`InventoryError::BackingStoreUnavailable`] if either store fails;
    ///   a cache failure after the insert leaves the item persisted
    pub async fn add_item(&self, item: Item) -> Result<Item> {
        let item_id = item.item_id;

        if self.store.find_by_item_id(item_id).await?.is_some() {
            warn!(item_id, "Rejected duplicate item");
            return Err(InventoryError::DuplicateItem(item_id));
        }

        // An item the cache cannot hold could never be read back
        let size = item.persisted_payload_len()?;
        let limit = self.cache.max_payload_len();
        if size > limit {
            warn!(item_id, size, limit, "Rejected oversize item");
            return Err(InventoryError::ItemTooLarge {
                item_id,
                size,
                limit,
            });
        }

        // A create that raced past the check above is caught by the unique index
        let id = self.store.insert(&item).await?;

        let mut item = item;
        item.id = Some(id.to_string());

        self.cache.put(item_id, &item).await?;

        info!(item_id, document_id = %id, "Item added");
        Ok(item)
    }

    // == Get Item ==
    /// Reads an item, preferring the cache.
    ///
    /// # Errors
    /// - [`InventoryError::ItemNotFound`] if neither layer holds `item_id`
    /// - [`InventoryError::BackingStoreUnavailable`] if either store fails,
    ///   including the cache refresh after a store hit
    pub async fn get_item(&self, item_id: i64) -> Result<ItemLookup> {
        if let Some(item) = self.cache.get(item_id).await? {
            debug!(item_id, "Cache hit");
            return Ok(ItemLookup {
                source: Source::Cache,
                item,
            });
        }

        debug!(item_id, "Cache miss, reading store");
        let document = self
            .store
            .find_by_item_id(item_id)
            .await?
            .ok_or(InventoryError::ItemNotFound(item_id))?;

        let item = document.into_item();
        self.cache.put(item_id, &item).await?;

        Ok(ItemLookup {
            source: Source::Store,
            item,
        })
    }

    /// Number of items in the durable store.
    pub async fn stored_items(&self) -> Result<usize> {
        Ok(self.store.count().await?)
    }
}
