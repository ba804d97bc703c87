//! Distance-matrix file format.
//!
//! Whitespace-separated ASCII: the node count `n`, then `n * n` distances
//! in row-major order. A malformed file is a load-time error; the engine is
//! never handed a matrix that failed to load.

mod reader;
mod writer;

pub use reader::{load_matrix, parse_matrix, read_matrix};
pub use writer::write_matrix;

use thiserror::Error;

use crate::distance::DistanceError;

/// Errors raised while loading a distance matrix.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing node count")]
    MissingNodeCount,

    #[error("invalid node count {0:?}")]
    InvalidNodeCount(String),

    #[error("missing distance at ({row}, {col})")]
    MissingDistance { row: usize, col: usize },

    #[error("invalid distance {token:?} at ({row}, {col})")]
    InvalidDistance {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("unexpected data after the last distance: {0:?}")]
    TrailingData(String),

    #[error(transparent)]
    Matrix(#[from] DistanceError),
}
