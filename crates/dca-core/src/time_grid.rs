//! Validated forecast time grid.
//!
//! A `TimeGrid` is the ordered sequence of time offsets (time since the
//! forecast start) at which a decline model is sampled.  The reference use
//! case is a uniform monthly grid, but evaluators accept any finite-length
//! grid, including non-uniform spacing and grids that do not start at zero.

use crate::errors::Result;
use crate::{ensure_grid, Size, Time};

/// An ordered sequence of non-negative, strictly increasing time offsets.
///
/// Construction validates the sequence once; evaluators can then consume the
/// offsets without re-checking ordering per step.  An empty grid is a valid
/// container — evaluators that require at least one sample reject it at call
/// entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    offsets: Vec<Time>,
}

impl TimeGrid {
    /// Build a grid from raw offsets.
    ///
    /// Every offset must be finite and non-negative, and the sequence must
    /// be strictly increasing.
    pub fn new(offsets: Vec<Time>) -> Result<Self> {
        for (i, &t) in offsets.iter().enumerate() {
            ensure_grid!(t.is_finite(), "offset at index {i} is not finite");
            ensure_grid!(t >= 0.0, "offset at index {i} is negative ({t})");
            if i > 0 {
                let prev = offsets[i - 1];
                ensure_grid!(
                    t > prev,
                    "offsets must be strictly increasing, got {prev} then {t} at index {i}"
                );
            }
        }
        Ok(Self { offsets })
    }

    /// Uniform monthly grid `0, 1, …, months` (one offset per month
    /// boundary, `months + 1` samples).
    pub fn monthly(months: Size) -> Self {
        Self {
            offsets: (0..=months).map(|m| m as Time).collect(),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> Size {
        self.offsets.len()
    }

    /// `true` if the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offsets as a slice.
    pub fn as_slice(&self) -> &[Time] {
        &self.offsets
    }

    /// Iterate over the offsets.
    pub fn iter(&self) -> std::slice::Iter<'_, Time> {
        self.offsets.iter()
    }
}

impl std::ops::Index<Size> for TimeGrid {
    type Output = Time;

    fn index(&self, index: Size) -> &Time {
        &self.offsets[index]
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = &'a Time;
    type IntoIter = std::slice::Iter<'a, Time>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}
