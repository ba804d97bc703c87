//! Optimization outcome types.

use serde::Serialize;

use super::Tour;

/// Why an optimization run stopped.
///
/// Both variants carry a valid result. The tour, improvement and iteration
/// count never reveal which one occurred on their own, so the reason is
/// reported alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A full scan found no improving move: the tour is a 2-opt local optimum.
    Converged,
    /// The iteration cap was hit while improving moves may remain.
    CappedOut,
}

/// Result of a 2-opt run.
///
/// # Examples
///
/// ```
/// use u_twoopt::distance::DistanceMatrix;
/// use u_twoopt::local_search::TwoOptEngine;
/// use u_twoopt::models::Termination;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
/// let result = TwoOptEngine::default().optimize(&dm);
/// assert_eq!(result.iterations, 1);
/// assert!(result.total_improvement < 0.0);
/// assert!((result.improvement() + result.total_improvement).abs() < 1e-12);
/// assert_eq!(result.termination, Termination::Converged);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Final tour.
    pub tour: Tour,
    /// Sum of all accepted move deltas; zero or negative.
    pub total_improvement: f64,
    /// Number of accepted improving moves.
    pub iterations: usize,
    /// Why the run stopped.
    pub termination: Termination,
}

impl OptimizationResult {
    /// Total distance reduction as a positive magnitude.
    pub fn improvement(&self) -> f64 {
        // Subtraction rather than negation keeps a zero result at +0.0.
        0.0 - self.total_improvement
    }

    /// Returns `true` if the run stopped at a local optimum.
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
