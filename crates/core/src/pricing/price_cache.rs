use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use horadric_market_data::PriceData;
use serde::Serialize;

/// A cached price and when it was fetched.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub payload: Arc<PriceData>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    /// Cached keys, sorted
    pub items: Vec<String>,
}

/// Price cache keyed by the item name exactly as the caller typed it.
///
/// Stale entries are never evicted; they read as absent and are replaced by
/// the next successful fetch.
pub struct PriceCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh payload for `key`, if any.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<Arc<PriceData>> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| Arc::clone(&entry.payload))
    }

    pub fn insert(&self, key: &str, payload: Arc<PriceData>, now: DateTime<Utc>) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                fetched_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Entry count includes stale entries that have not been replaced yet.
    pub fn stats(&self) -> CacheStats {
        let mut items: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        items.sort();
        CacheStats {
            size: items.len(),
            items,
        }
    }
}
