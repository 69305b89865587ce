//! Inventory Cache - an inventory service with a cache-aside layer
//!
//! Items live in a document store and are fronted by a TTL cache:
//! writes persist first and then populate the cache, reads try the cache
//! and repopulate it from the store on a miss.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use inventory::{InventoryService, Item, Source};
pub use tasks::spawn_cleanup_task;
