//! Engine seam shared by the cached and uncached range-sum paths

use crate::error::Result;

/// A mutable array that answers inclusive range-sum queries.
///
/// Implemented directly by [`RangeArray`](crate::RangeArray) and by the
/// caching layer, so one operation sequence can be replayed through either.
pub trait RangeEngine {
    /// Sum of `array[left..=right]`
    fn range_sum(&mut self, left: usize, right: usize) -> Result<i64>;

    /// Write `value` at `index`
    fn update(&mut self, index: usize, value: i64) -> Result<()>;

    /// Length of the underlying array
    fn len(&self) -> usize;

    /// Is the underlying array empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
