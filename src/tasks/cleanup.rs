//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//! Reads already treat expired entries as absent; the sweep only reclaims
//! memory held by entries nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// Returns a JoinHandle that can be aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
