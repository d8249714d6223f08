//! Cache Statistics Module
//!
//! Tracks what the expiring layer observed: hits, misses, purges and writes.

use serde::Serialize;

// == Cache Stats ==
/// Counters kept by an [`ExpiringCache`](super::ExpiringCache).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a value (raw values included)
    pub hits: u64,
    /// Reads that returned nothing, stale reads included
    pub misses: u64,
    /// Stale entries purged by a read
    pub expired: u64,
    /// Writes handed to the backing store
    pub writes: u64,
    /// Writes suppressed by the only-if-absent guard
    pub skipped_writes: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
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

    /// Counts a stale read: one miss plus one purge.
    pub fn record_expired(&mut self) {
        self.misses += 1;
        self.expired += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_skipped_write(&mut self) {
        self.skipped_writes += 1;
    }
}
