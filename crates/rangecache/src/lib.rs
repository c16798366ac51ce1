//! # rangecache
//!
//! LRU cache layer for rangedb range-sum queries.
//!
//! ## Architecture
//! - **HashMap**: AHash for fast key lookups (O(1))
//! - **LRU List**: Doubly-linked list for eviction (O(1))
//! - **Invalidation**: Point updates scan cached keys and drop every range covering the index
//! - **Integration**: Owns the rangedb array so writes cannot bypass invalidation

#![warn(missing_docs)]

mod cache;
mod lru;
mod stats;

pub use cache::RangeCache;
pub use lru::{Keys, LruCache};
pub use stats::{CacheStats, StatsSnapshot};
