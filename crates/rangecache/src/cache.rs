//! RangeCache: LRU range-sum cache wrapping a RangeArray
//!
//! The cache owns its array, so every write goes through [`RangeCache::update`]
//! and the coherence rule holds: no cached sum covers an index written after
//! the sum was computed.

use rangedb::{RangeArray, RangeEngine, RangeKey, Result};
use tracing::trace;

use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cached range-sum engine with update-driven invalidation
pub struct RangeCache {
    /// Array the sums are computed over
    array: RangeArray,

    /// LRU cache of range sums
    cache: LruCache<RangeKey, i64>,

    /// Cache statistics
    stats: CacheStats,
}

impl RangeCache {
    /// Create a new RangeCache over `array`
    ///
    /// # Arguments
    /// * `array` - Array to answer queries over; owned for the cache's lifetime
    /// * `capacity` - Maximum number of cached ranges
    ///
    /// # Returns
    /// * `Err(Error::Config)` - if `capacity` is 0
    pub fn new(array: RangeArray, capacity: usize) -> Result<Self> {
        Ok(Self {
            array,
            cache: LruCache::new(capacity)?,
            stats: CacheStats::new(),
        })
    }

    /// Sum of `array[left..=right]`, served from cache when possible
    ///
    /// # Returns
    /// * `Err(Error::InvalidRange)` - the cache is left untouched
    pub fn range_sum(&mut self, left: usize, right: usize) -> Result<i64> {
        let key = RangeKey::checked(left, right, self.array.len())?;

        // Try cache first
        if let Some(&sum) = self.cache.get(&key) {
            self.stats.record_hit();
            return Ok(sum);
        }

        // Cache miss - compute from the array
        self.stats.record_miss();
        let sum = self.array.range_sum(key.left, key.right)?;
        trace!(left, right, width = key.width(), sum, "computed range sum");

        if self.cache.put(key, sum).is_some() {
            self.stats.record_eviction();
        }
        self.stats.record_insert();

        Ok(sum)
    }

    /// Write `value` at `index` and drop every cached range covering it
    ///
    /// # Returns
    /// * `Ok(n)` - number of cache entries invalidated
    /// * `Err(Error::IndexOutOfRange)` - neither array nor cache is modified
    pub fn update(&mut self, index: usize, value: i64) -> Result<usize> {
        self.array.set(index, value)?;
        Ok(self.invalidate(index))
    }

    /// Drop every cached range covering `index`; other entries are kept
    ///
    /// Full scan over the cached keys, bounded by capacity.
    pub fn invalidate(&mut self, index: usize) -> usize {
        let removed = self.cache.retain(|key, _| !key.contains(index));
        self.stats.record_invalidations(removed as u64);

        if removed > 0 {
            trace!(index, removed, "invalidated cached ranges");
        }
        removed
    }

    /// Cached sum for `key`, without touching recency or statistics
    pub fn cached(&self, key: &RangeKey) -> Option<i64> {
        self.cache.peek(key).copied()
    }

    /// Cached keys, most recently used first
    pub fn cached_keys(&self) -> impl Iterator<Item = &RangeKey> + '_ {
        self.cache.keys()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Read-only view of the array
    pub fn array(&self) -> &RangeArray {
        &self.array
    }

    /// Clear the cache (array remains unchanged)
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }

    /// Detach the cache and return the array
    pub fn into_array(self) -> RangeArray {
        self.array
    }
}

impl RangeEngine for RangeCache {
    fn range_sum(&mut self, left: usize, right: usize) -> Result<i64> {
        RangeCache::range_sum(self, left, right)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        RangeCache::update(self, index, value).map(|_| ())
    }

    fn len(&self) -> usize {
        self.array.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangedb::Error;

    fn cache_over(values: Vec<i64>, capacity: usize) -> RangeCache {
        RangeCache::new(RangeArray::new(values), capacity).unwrap()
    }

    #[test]
    fn test_zero_capacity() {
        let result = RangeCache::new(RangeArray::new(vec![1, 2, 3]), 0);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = cache_over(vec![1, 2, 3, 4, 5], 10);

        // First call - miss
        assert_eq!(cache.range_sum(1, 3), Ok(9));
        assert_eq!(cache.stats().misses(), 1);
        assert_eq!(cache.stats().hits(), 0);

        // Second call - hit
        assert_eq!(cache.range_sum(1, 3), Ok(9));
        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.cached(&RangeKey::new(1, 3)), Some(9));
    }

    #[test]
    fn test_update_invalidates_stale_sum() {
        let mut cache = cache_over(vec![1, 2, 3, 4, 5], 10);

        assert_eq!(cache.range_sum(1, 3), Ok(9));
        assert_eq!(cache.update(2, 100), Ok(1));
        assert_eq!(cache.cached(&RangeKey::new(1, 3)), None);

        assert_eq!(cache.range_sum(1, 3), Ok(106));
        assert_eq!(cache.stats().misses(), 2);
        assert_eq!(cache.stats().invalidations(), 1);
    }

    #[test]
    fn test_capacity_two_evicts_oldest() {
        let mut cache = cache_over(vec![1, 2, 3, 4, 5, 6], 2);

        cache.range_sum(0, 1).unwrap();
        cache.range_sum(2, 3).unwrap();
        cache.range_sum(4, 5).unwrap();

        assert_eq!(cache.cached(&RangeKey::new(0, 1)), None);
        assert_eq!(cache.cached(&RangeKey::new(2, 3)), Some(7));
        assert_eq!(cache.cached(&RangeKey::new(4, 5)), Some(11));
        assert_eq!(cache.stats().evictions(), 1);

        cache.range_sum(2, 3).unwrap();
        cache.range_sum(4, 5).unwrap();
        assert_eq!(cache.stats().hits(), 2);
    }

    #[test]
    fn test_invalidation_is_precise() {
        let mut cache = cache_over(vec![1; 10], 10);

        for (l, r) in [(0, 2), (3, 3), (3, 6), (4, 9), (5, 5), (7, 9)] {
            cache.range_sum(l, r).unwrap();
        }

        assert_eq!(cache.update(5, 10), Ok(3));

        assert_eq!(cache.cached(&RangeKey::new(3, 6)), None);
        assert_eq!(cache.cached(&RangeKey::new(4, 9)), None);
        assert_eq!(cache.cached(&RangeKey::new(5, 5)), None);
        assert_eq!(cache.cached(&RangeKey::new(0, 2)), Some(3));
        assert_eq!(cache.cached(&RangeKey::new(3, 3)), Some(1));
        assert_eq!(cache.cached(&RangeKey::new(7, 9)), Some(3));
        assert_eq!(cache.cache_len(), 3);
    }

    #[test]
    fn test_negative_sum_is_cached() {
        let mut cache = cache_over(vec![-1, 0, 2], 4);

        assert_eq!(cache.range_sum(0, 1), Ok(-1));
        assert_eq!(cache.range_sum(0, 1), Ok(-1));
        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.cached(&RangeKey::new(0, 1)), Some(-1));
    }

    #[test]
    fn test_invalid_range_leaves_cache() {
        let mut cache = cache_over(vec![1, 2, 3], 4);
        cache.range_sum(0, 1).unwrap();

        assert_eq!(
            cache.range_sum(2, 1),
            Err(Error::InvalidRange { left: 2, right: 1, len: 3 })
        );
        assert!(cache.range_sum(0, 3).is_err());

        assert_eq!(cache.cache_len(), 1);
        assert_eq!(cache.stats().misses(), 1);
        assert_eq!(cache.stats().inserts(), 1);
    }

    #[test]
    fn test_overflowing_sum_is_not_cached() {
        let mut cache = cache_over(vec![i64::MAX, 1], 4);

        assert_eq!(
            cache.range_sum(0, 1),
            Err(Error::Overflow { left: 0, right: 1 })
        );
        assert_eq!(cache.cached(&RangeKey::new(0, 1)), None);
        assert_eq!(cache.stats().inserts(), 0);

        assert_eq!(cache.update(0, 5), Ok(0));
        assert_eq!(cache.range_sum(0, 1), Ok(6));
    }

    #[test]
    fn test_update_out_of_range() {
        let mut cache = cache_over(vec![1, 2, 3], 4);
        cache.range_sum(0, 2).unwrap();

        assert_eq!(
            cache.update(3, 50),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(cache.array().as_slice(), &[1, 2, 3]);
        assert_eq!(cache.cached(&RangeKey::new(0, 2)), Some(6));
    }

    #[test]
    fn test_update_with_empty_cache() {
        let mut cache = cache_over(vec![1, 2, 3], 4);
        assert_eq!(cache.update(0, 7), Ok(0));
        assert_eq!(cache.into_array().into_inner(), vec![7, 2, 3]);
    }

    #[test]
    fn test_clear_cache() {
        let mut cache = cache_over(vec![1, 2, 3], 4);
        cache.range_sum(0, 1).unwrap();
        cache.range_sum(1, 2).unwrap();
        assert_eq!(cache.cached_keys().count(), 2);

        cache.clear_cache();

        assert_eq!(cache.cache_len(), 0);
        assert_eq!(cache.stats().misses(), 0);
        assert_eq!(cache.capacity(), 4);
    }
}
