//! Cache Entry Module
//!
//! A single stored value with its absolute expiry.

use std::time::Duration;

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Write timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry written at `now_ms` that lives for `ttl`.
    pub fn new(value: String, ttl: Duration, now_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl.as_millis() as u64),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is expired once the current time reaches the expiration
    /// time, so a full TTL window has elapsed exactly at `expires_at`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000_000;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_secs(30), T0);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.created_at, T0);
        assert_eq!(entry.expires_at, T0 + 30_000);
        assert!(!entry.is_expired(T0));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("v".to_string(), Duration::from_secs(30), T0);

        assert!(!entry.is_expired(T0 + 29_999));
        assert!(entry.is_expired(T0 + 30_001));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("v".to_string(), Duration::from_secs(30), T0);

        // Expired exactly when the window closes
        assert!(entry.is_expired(T0 + 30_000), "Entry should be expired at boundary");
    }
}
