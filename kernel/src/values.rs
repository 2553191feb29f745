//! Value-vector layout, target pattern, and per-variable bounds.
//!
//! A value vector is `num_fixed + num_free` signed integers. The fixed
//! prefix is compared against the target pattern when a walk reaches the
//! start node; every slot is checked against its inclusive bounds.

use thiserror::Error;

/// A full value vector. Length always equals [`ValueLayout::num_values`].
pub type ValueVector = Vec<i64>;

/// Validation failure for layout, target, or bounds inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// An input array does not have the length the layout requires.
    #[error("{what} has length {actual}, layout requires {expected}")]
    LayoutMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A variable's lower bound exceeds its upper bound.
    #[error("variable {index} has inverted bounds [{lower}, {upper}]")]
    InvertedBounds { index: usize, lower: i64, upper: i64 },
    /// `num_fixed + num_free` does not fit in `usize`.
    #[error("layout of {num_fixed} fixed and {num_free} free slots overflows usize")]
    LayoutOverflow { num_fixed: usize, num_free: usize },
}

/// How many slots are fixed (target-checked) and how many are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueLayout {
    pub num_fixed: usize,
    pub num_free: usize,
}

impl ValueLayout {
    #[must_use]
    pub const fn new(num_fixed: usize, num_free: usize) -> Self {
        Self {
            num_fixed,
            num_free,
        }
    }

    /// Check the slot count is representable.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LayoutOverflow`] if `num_fixed + num_free`
    /// overflows.
    pub const fn validate(&self) -> Result<(), LayoutError> {
        match self.num_fixed.checked_add(self.num_free) {
            Some(_) => Ok(()),
            None => Err(LayoutError::LayoutOverflow {
                num_fixed: self.num_fixed,
                num_free: self.num_free,
            }),
        }
    }

    /// Total slot count of every value vector under this layout.
    ///
    /// Saturates for layouts [`ValueLayout::validate`] rejects.
    #[must_use]
    pub const fn num_values(&self) -> usize {
        self.num_fixed.saturating_add(self.num_free)
    }

    /// The all-zero vector the seed state starts from.
    #[must_use]
    pub fn zeroed(&self) -> ValueVector {
        vec![0; self.num_values()]
    }
}

/// The caller's required values for the fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPatternV1 {
    values: Vec<i64>,
}

impl TargetPatternV1 {
    /// Build a target pattern, checking it covers exactly the fixed prefix.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LayoutMismatch`] if `values.len() != layout.num_fixed`.
    pub fn new(values: Vec<i64>, layout: ValueLayout) -> Result<Self, LayoutError> {
        if values.len() != layout.num_fixed {
            return Err(LayoutError::LayoutMismatch {
                what: "target pattern",
                expected: layout.num_fixed,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Whether the fixed prefix of `values` equals the pattern exactly.
    #[must_use]
    pub fn matches(&self, values: &[i64]) -> bool {
        values.len() >= self.values.len() && values[..self.values.len()] == self.values[..]
    }
}

/// Inclusive `[lower, upper]` bounds for every slot of the value vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBoundsV1 {
    lower: Vec<i64>,
    upper: Vec<i64>,
}

impl VariableBoundsV1 {
    /// Build bounds from parallel lower/upper arrays.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LayoutMismatch`] if either array does not cover
    /// every slot, or [`LayoutError::InvertedBounds`] if `lower[i] > upper[i]`.
    pub fn new(lower: Vec<i64>, upper: Vec<i64>, layout: ValueLayout) -> Result<Self, LayoutError> {
        let expected = layout.num_values();
        if lower.len() != expected {
            return Err(LayoutError::LayoutMismatch {
                what: "lower bounds",
                expected,
                actual: lower.len(),
            });
        }
        if upper.len() != expected {
            return Err(LayoutError::LayoutMismatch {
                what: "upper bounds",
                expected,
                actual: upper.len(),
            });
        }
        if let Some(index) = lower.iter().zip(&upper).position(|(lo, hi)| lo > hi) {
            return Err(LayoutError::InvertedBounds {
                index,
                lower: lower[index],
                upper: upper[index],
            });
        }
        Ok(Self { lower, upper })
    }

    /// Build bounds from `(lower, upper)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`VariableBoundsV1::new`].
    pub fn from_pairs(pairs: &[(i64, i64)], layout: ValueLayout) -> Result<Self, LayoutError> {
        let (lower, upper) = pairs.iter().copied().unzip();
        Self::new(lower, upper, layout)
    }

    /// Index of the first slot outside its bounds, if any.
    #[must_use]
    pub fn first_violation(&self, values: &[i64]) -> Option<usize> {
        values
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .position(|(v, (lo, hi))| v < lo || v > hi)
    }
}
