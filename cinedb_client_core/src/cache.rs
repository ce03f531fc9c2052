//! Time-bounded in-memory cache of detail records
//!
//! Entries are keyed by the deterministic cache key, stamped with the
//! injected clock on insertion, and replaced wholesale on refresh. The store
//! holds raw JSON values; typed decoding happens at the API layer so one
//! cache serves every endpoint. Nothing here persists across a process
//! restart.

use crate::clock::Clock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// One cached value with its fetch timestamp
///
/// `fetched_at` is set only on successful fetch completion; a failed fetch
/// never produces an entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub fetched_at: Instant,
}

/// Cache usage statistics
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub entry_count: usize,
    pub hit_count: u64,
    pub miss_count: u64,
}

/// Keyed, timestamped record store with TTL-based freshness
pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    stats: RwLock<CacheStats>,
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: RwLock::new(CacheStats::default()),
            clock,
        }
    }

    /// Look up an entry. Updates hit/miss counters, never mutates the entry.
    pub async fn get(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.read().await;
        let entry = entries.get(key).cloned();
        let mut stats = self.stats.write().await;
        match entry {
            Some(entry) => {
                stats.hit_count += 1;
                Some(entry)
            }
            None => {
                stats.miss_count += 1;
                None
            }
        }
    }

    /// Whether `entry` is still fresh under `ttl` at the current clock time
    pub fn is_fresh(&self, entry: &CacheEntry, ttl: Duration) -> bool {
        self.clock.now().duration_since(entry.fetched_at) < ttl
    }

    /// Insert or overwrite, stamping `fetched_at` with the current clock time
    pub async fn put(&self, key: &str, value: Value) {
        let entry = CacheEntry {
            value,
            fetched_at: self.clock.now(),
        };
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry);
        self.stats.write().await.entry_count = entries.len();
    }

    pub async fn evict(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        self.stats.write().await.entry_count = entries.len();
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
        let mut stats = self.stats.write().await;
        stats.entry_count = 0;
    }

    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use serde_json::json;

    fn store() -> CacheStore {
        CacheStore::new(Arc::new(SystemClock))
    }

    #[tokio::test]
    async fn test_put_then_get_returns_value() {
        let cache = store();
        cache.put("/movie/1", json!({"id": 1})).await;
        let entry = cache.get("/movie/1").await.unwrap();
        assert_eq!(entry.value, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let cache = store();
        assert!(cache.get("/movie/404").await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_wholesale() {
        let cache = store();
        cache.put("k", json!({"v": 1})).await;
        let first = cache.get("k").await.unwrap();
        cache.put("k", json!({"v": 2})).await;
        let second = cache.get("k").await.unwrap();
        assert_eq!(second.value, json!({"v": 2}));
        assert!(second.fetched_at >= first.fetched_at);
    }

    #[tokio::test]
    async fn test_evict_and_clear() {
        let cache = store();
        cache.put("a", json!(1)).await;
        cache.put("b", json!(2)).await;
        cache.evict("a").await;
        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_some());
        cache.clear().await;
        assert!(cache.get("b").await.is_none());
        assert_eq!(cache.stats().await.entry_count, 0);
    }

    #[tokio::test]
    async fn test_stats_count_hits_and_misses() {
        let cache = store();
        cache.put("k", json!(1)).await;
        cache.get("k").await;
        cache.get("k").await;
        cache.get("absent").await;
        let stats = cache.stats().await;
        assert_eq!(stats.hit_count, 2);
        assert_eq!(stats.miss_count, 1);
        assert_eq!(stats.entry_count, 1);
    }

    #[tokio::test]
    async fn test_fresh_entry_within_ttl() {
        let cache = store();
        cache.put("k", json!(1)).await;
        let entry = cache.get("k").await.unwrap();
        assert!(cache.is_fresh(&entry, Duration::from_secs(60)));
        assert!(!cache.is_fresh(&entry, Duration::ZERO));
    }
}
