//! Domain model types for 2-opt tour optimization.
//!
//! A [`Tour`] is the permutation the engine mutates; an
//! [`OptimizationResult`] is what a run hands back to the caller.

mod result;
mod tour;

pub use result::{OptimizationResult, Termination};
pub use tour::Tour;
