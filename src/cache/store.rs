//! Cache Store Module
//!
//! Key-value engine with per-entry absolute expiry. Time comes from an
//! injected [`Clock`] so expiry can be driven deterministically.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::clock::Clock;
use crate::error::{StoreError, StoreResult};

// == Cache Store ==
/// Key-value storage with TTL expiration.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Time source for stamping and expiring entries
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores a key-value pair that expires `ttl` from now.
    ///
    /// If the key already exists, the value is overwritten and the expiry is
    /// reset.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::InvalidEntry("Key cannot be empty".to_string()));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(StoreError::InvalidEntry(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(StoreError::InvalidEntry(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let entry = CacheEntry::new(value, ttl, self.clock.now_ms());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` when the key is absent or expired. Expired entries are
    /// removed on access and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
