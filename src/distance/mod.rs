//! Distance model.
//!
//! Provides the dense, read-only distance matrix the 2-opt engine scores
//! tours against.

mod matrix;

pub use matrix::DistanceMatrix;

use thiserror::Error;

/// Errors raised while building or querying a [`DistanceMatrix`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// The data length doesn't match `size * size`.
    #[error("expected {size}x{size} distances, got {len} values")]
    DimensionMismatch {
        /// Declared number of locations.
        size: usize,
        /// Number of values supplied.
        len: usize,
    },

    /// A distance is negative, infinite or NaN.
    #[error("invalid distance {value} at ({row}, {col}): must be finite and non-negative")]
    InvalidDistance {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The rejected value.
        value: f64,
    },

    /// An index lies outside `[0, size)`.
    #[error("index ({from}, {to}) out of bounds for {size} locations")]
    IndexOutOfBounds {
        /// Source index.
        from: usize,
        /// Target index.
        to: usize,
        /// Number of locations.
        size: usize,
    },
}
