//! Fixed-length integer array with the uncached range-sum path

use rand::Rng;

use crate::engine::RangeEngine;
use crate::error::{Error, Result};
use crate::key::RangeKey;
use crate::workload::VALUE_RANGE;

/// Ordered, fixed-length sequence of integers indexed `0..n`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeArray {
    values: Vec<i64>,
}

impl RangeArray {
    /// Wrap existing values. The length is fixed from here on.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Array of `len` values drawn uniformly from the workload value range
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let values = (0..len).map(|_| rng.gen_range(VALUE_RANGE)).collect();
        Self { values }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the array has no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the raw values
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Take back the raw values
    pub fn into_inner(self) -> Vec<i64> {
        self.values
    }

    /// Sum of `array[left..=right]` by linear accumulation
    ///
    /// # Returns
    /// * `Err(Error::InvalidRange)` if the range is reversed or past the end
    /// * `Err(Error::Overflow)` if the sum does not fit in an `i64`
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64> {
        let key = RangeKey::checked(left, right, self.len())?;
        self.sum_of(key)
    }

    /// Sum over an already validated key
    fn sum_of(&self, key: RangeKey) -> Result<i64> {
        let sum: i128 = self.values[key.left..=key.right]
            .iter()
            .map(|&v| i128::from(v))
            .sum();
        i64::try_from(sum).map_err(|_| Error::Overflow {
            left: key.left,
            right: key.right,
        })
    }

    /// Overwrite `array[index]`
    ///
    /// # Returns
    /// * `Ok(previous)` - the value that was replaced
    /// * `Err(Error::IndexOutOfRange)` - nothing was written
    pub fn set(&mut self, index: usize, value: i64) -> Result<i64> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }
}

impl From<Vec<i64>> for RangeArray {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl RangeEngine for RangeArray {
    fn range_sum(&mut self, left: usize, right: usize) -> Result<i64> {
        RangeArray::range_sum(self, left, right)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        self.set(index, value).map(|_| ())
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
