//! Range keys: inclusive `(left, right)` index pairs

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inclusive sub-range `[left, right]` of an array.
///
/// Two keys are equal only if both endpoints match; overlapping ranges are
/// distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RangeKey {
    /// Left endpoint (inclusive)
    pub left: usize,
    /// Right endpoint (inclusive)
    pub right: usize,
}

impl RangeKey {
    /// Build a key without bounds checking.
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Build a key valid for an array of length `len`
    ///
    /// # Returns
    /// * `Err(Error::InvalidRange)` if `left > right` or `right >= len`
    pub fn checked(left: usize, right: usize, len: usize) -> Result<Self> {
        if left > right || right >= len {
            return Err(Error::InvalidRange { left, right, len });
        }
        Ok(Self { left, right })
    }

    /// Does this range cover `index`?
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }

    /// Number of indices covered
    #[inline]
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }
}
