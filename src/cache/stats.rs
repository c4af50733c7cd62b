//! Cache Statistics Module
//!
//! Counts lookups and evictions for an LRU cache.

use serde::Serialize;

// == Cache Stats ==
/// Running counters for one cache instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of `get` calls that found their key
    pub hits: u64,
    /// Number of `get` calls that did not
    pub misses: u64,
    /// Number of entries dropped to stay within capacity
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Fixed capacity of the cache
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed counters for a cache of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
