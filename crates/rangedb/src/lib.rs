//! # rangedb
//!
//! Fixed-size integer array answering inclusive range-sum queries, plus the
//! synthetic workloads used to exercise it.
//!
//! ## Contents
//! - **RangeArray**: owned array with the uncached (linear) range-sum path
//! - **RangeKey**: inclusive `(left, right)` pair, the cache key type
//! - **RangeEngine**: seam implemented by cached and uncached engines
//! - **Workload**: hot-pool skewed operation sequences from a seeded RNG
//! - **replay**: drive an operation sequence through any engine

#![warn(missing_docs)]

mod array;
mod engine;
mod error;
mod key;
mod replay;
mod workload;

pub use array::RangeArray;
pub use engine::RangeEngine;
pub use error::{Error, Result};
pub use key::RangeKey;
pub use replay::{replay, ReplayOutcome};
pub use workload::{Operation, Workload, WorkloadConfig, VALUE_RANGE};
