//! Cache statistics tracking
//!
//! Counters live inside the owning `RangeCache`, which is single-threaded,
//! so plain `Cell`s are enough.

use std::cell::Cell;

use serde::Serialize;

/// Statistics for cache performance tracking
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: Cell<u64>,
    misses: Cell<u64>,
    evictions: Cell<u64>,
    inserts: Cell<u64>,
    invalidations: Cell<u64>,
}

/// Point-in-time copy of [`CacheStats`], suitable for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that fell through to the array
    pub misses: u64,
    /// Entries dropped by LRU eviction
    pub evictions: u64,
    /// Entries inserted
    pub inserts: u64,
    /// Entries dropped by update invalidation
    pub invalidations: u64,
    /// `hits / (hits + misses)`
    pub hit_ratio: f64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// Record a cache miss
    pub fn record_miss(&self) {
        self.misses.set(self.misses.get() + 1);
    }

    /// Record an eviction
    pub fn record_eviction(&self) {
        self.evictions.set(self.evictions.get() + 1);
    }

    /// Record an insert
    pub fn record_insert(&self) {
        self.inserts.set(self.inserts.get() + 1);
    }

    /// Record `count` entries invalidated by one update
    pub fn record_invalidations(&self, count: u64) {
        self.invalidations.set(self.invalidations.get() + count);
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions.get()
    }

    /// Get total inserts
    pub fn inserts(&self) -> u64 {
        self.inserts.get()
    }

    /// Get total invalidated entries
    pub fn invalidations(&self) -> u64 {
        self.invalidations.get()
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Copy all counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits(),
            misses: self.misses(),
            evictions: self.evictions(),
            inserts: self.inserts(),
            invalidations: self.invalidations(),
            hit_ratio: self.hit_ratio(),
        }
    }

    /// Reset all statistics
    pub fn reset(&self) {
        self.hits.set(0);
        self.misses.set(0);
        self.evictions.set(0);
        self.inserts.set(0);
        self.invalidations.set(0);
    }
}
