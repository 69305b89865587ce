//! Item Cache Layer
//!
//! Stores serialized item snapshots under `item:<item_id>` with a fixed
//! 30 second lifetime.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStore, MAX_VALUE_SIZE};
use crate::error::StoreResult;
use crate::inventory::Item;

/// Lifetime of every item cache entry.
pub const ITEM_TTL: Duration = Duration::from_secs(30);

/// Prefix of every item cache key.
pub const CACHE_KEY_PREFIX: &str = "item:";

/// Cache key for an item.
pub fn cache_key(item_id: i64) -> String {
    format!("{CACHE_KEY_PREFIX}{item_id}")
}

// == Item Cache Trait ==
/// Volatile copy of recently written or read items.
#[async_trait]
pub trait ItemCache: Send + Sync {
    /// Writes a full snapshot of `item`, replacing any entry and resetting
    /// its expiry.
    async fn put(&self, item_id: i64, item: &Item) -> StoreResult<()>;

    /// Returns the cached snapshot, or `None` if absent or expired.
    async fn get(&self, item_id: i64) -> StoreResult<Option<Item>>;

    /// Largest encoded snapshot `put` accepts, in bytes.
    fn max_payload_len(&self) -> usize {
        MAX_VALUE_SIZE
    }
}

// == Key-Value Item Cache ==
/// [`ItemCache`] over the in-process key-value engine.
#[derive(Debug, Clone)]
pub struct KeyValueItemCache {
    store: Arc<RwLock<CacheStore>>,
}

impl KeyValueItemCache {
    pub fn new(store: Arc<RwLock<CacheStore>>) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> Arc<RwLock<CacheStore>> {
        self.store.clone()
    }
}

#[async_trait]
impl ItemCache for KeyValueItemCache {
    async fn put(&self, item_id: i64, item: &Item) -> StoreResult<()> {
        let payload = item.to_cache_payload()?;
        let key = cache_key(item_id);

        let mut store = self.store.write().await;
        store.set(key, payload, ITEM_TTL)?;

        debug!(item_id, "Cached item for {}s", ITEM_TTL.as_secs());
        Ok(())
    }

    async fn get(&self, item_id: i64) -> StoreResult<Option<Item>> {
        // Write lock: expired entries are dropped and stats updated on access
        let payload = self.store.write().await.get(&cache_key(item_id));

        payload
            .map(|payload| Item::from_cache_payload(&payload))
            .transpose()
    }
}
