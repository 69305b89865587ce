//! Inventory Module
//!
//! Item model, the two backing-store seams and the cache-aside service
//! that coordinates them.

mod cache;
mod item;
mod service;
mod store;

pub use cache::{cache_key, ItemCache, KeyValueItemCache, CACHE_KEY_PREFIX, ITEM_TTL};
pub use item::{Document, DocumentId, Item};
pub use service::{InventoryService, ItemLookup, Source};
pub use store::{DocumentStore, MemoryCollection};
