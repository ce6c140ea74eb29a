//! Small TTL cache
//!
//! Generalizes the dashboard's ad-hoc "analytics payload + fetch timestamp"
//! caching into a reusable key -> (value, expiry) abstraction. Entries are
//! evicted lazily on read; the cache is single-process only.

use dashmap::DashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default validity window for cached analytics payloads
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Time-to-live cache
///
/// `DashMap` needs `Eq + Hash` keys even to be debug-printed, so the bound
/// lives on the struct.
#[derive(Debug)]
pub struct TtlCache<K: Eq + Hash, V> {
    entries: DashMap<K, Entry<V>>,
    ttl: Duration,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Create a cache with the given time-to-live
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Insert a value, stamping its expiry from the configured TTL
    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(
            key,
            Entry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Get an unexpired value; expired entries are removed on access
    pub fn get(&self, key: &K) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of entries, including any not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("analytics", 42);
        assert_eq!(cache.get(&"analytics"), Some(42));
    }

    #[test]
    fn test_miss_after_expiry() {
        let cache = TtlCache::new(Duration::from_millis(0));
        cache.insert("analytics", 42);
        // TTL of zero expires immediately
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get(&"analytics"), None);
        // The stale entry was evicted on read
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn test_cache_debug_format() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("analytics", 42);
        let rendered = format!("{:?}", cache);
        assert!(rendered.contains("ttl"));
    }

    #[test]
    fn test_insert_refreshes_expiry_and_value() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("k", 1);
        cache.insert("k", 2);
        assert_eq!(cache.get(&"k"), Some(2));
        assert_eq!(cache.len(), 1);
    }
}
