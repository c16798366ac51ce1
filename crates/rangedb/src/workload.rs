//! Synthetic workload generation
//!
//! A workload is a finite sequence of range queries and point updates,
//! skewed toward a small pool of wide "hot" ranges. The random source is
//! always passed in, so a seeded `StdRng` reproduces the same sequence.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::RangeKey;

/// Values written by generated updates (and by [`RangeArray::random`](crate::RangeArray::random))
pub const VALUE_RANGE: RangeInclusive<i64> = 1..=100;

/// One step of a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum Operation {
    /// Point update `array[index] = value`
    Update {
        /// Target index
        index: usize,
        /// New value
        value: i64,
    },
    /// Inclusive range-sum query
    Range(RangeKey),
}

/// Workload generator parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Array length `n`
    pub size: usize,
    /// Number of operations to generate
    pub queries: usize,
    /// Number of ranges in the hot pool
    pub hot_pool: usize,
    /// Probability that a range query is drawn from the hot pool
    pub hot_probability: f64,
    /// Probability that an operation is an update
    pub update_probability: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            size: 100_000,
            queries: 50_000,
            hot_pool: 30,
            hot_probability: 0.95,
            update_probability: 0.03,
        }
    }
}

impl WorkloadConfig {
    /// Reject parameters that cannot produce a well-formed workload
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidWorkload("array size must be greater than 0".into()));
        }
        check_probability("hot_probability", self.hot_probability)?;
        check_probability("update_probability", self.update_probability)?;
        if self.hot_pool == 0 && self.hot_probability > 0.0 {
            return Err(Error::InvalidWorkload(
                "hot_pool must be non-empty when hot_probability > 0".into(),
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidWorkload(format!("{} must be in [0, 1], got {}", name, p)))
    }
}

/// A generated hot pool and the operation sequence drawn against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Ranges sampled once before generation; immutable afterwards
    pub hot_pool: Vec<RangeKey>,
    /// Operations in replay order
    pub operations: Vec<Operation>,
}

impl Workload {
    /// Generate a workload
    ///
    /// # Arguments
    /// * `config` - Generator parameters, validated before any draw
    /// * `rng` - Random source; reuse the seed to reproduce a run
    ///
    /// # Returns
    /// * `Err(Error::InvalidWorkload)` - if `config` is malformed
    pub fn generate<R: Rng + ?Sized>(config: &WorkloadConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let n = config.size;
        let mid = n / 2;

        // Hot ranges straddle the midpoint: left in the lower half, right in the upper
        let hot_pool: Vec<RangeKey> = (0..config.hot_pool)
            .map(|_| RangeKey::new(rng.gen_range(0..=mid), rng.gen_range(mid..=n - 1)))
            .collect();

        let mut operations = Vec::with_capacity(config.queries);
        for _ in 0..config.queries {
            let op = if rng.gen_bool(config.update_probability) {
                Operation::Update {
                    index: rng.gen_range(0..n),
                    value: rng.gen_range(VALUE_RANGE),
                }
            } else if rng.gen_bool(config.hot_probability) {
                Operation::Range(hot_pool[rng.gen_range(0..hot_pool.len())])
            } else {
                let left = rng.gen_range(0..n);
                let right = rng.gen_range(left..n);
                Operation::Range(RangeKey::new(left, right))
            };
            operations.push(op);
        }

        Ok(Self { hot_pool, operations })
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the workload has no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of update operations
    pub fn update_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::Update { .. }))
            .count()
    }

    /// Number of range operations
    pub fn range_count(&self) -> usize {
        self.len() - self.update_count()
    }
}
