//! Closed-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! For positions `i < j` of a cyclic tour `t`, compute the change in length
//! from replacing edges `(t[i], t[i+1])` and `(t[j], t[j+1])` with
//! `(t[i], t[j])` and `(t[i+1], t[j+1])`, indices taken modulo `n`:
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! Pairs are scanned with `i` ascending in the outer loop and `j` ascending
//! from `i + 2` in the inner loop. The first pair with `delta < -epsilon`
//! is applied by reversing `t[i+1..=j]` and the scan restarts from the top
//! (first-improvement strategy). The loop ends when a full scan finds
//! nothing or the iteration cap is reached.
//!
//! Only the two swapped edges enter the delta, so the value equals the true
//! change in tour length only for symmetric matrices.
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::{debug, trace};

use crate::config::TwoOptConfig;
use crate::distance::DistanceMatrix;
use crate::models::{OptimizationResult, Termination, Tour};

/// Runs the 2-opt improvement loop over a distance matrix.
///
/// The engine holds only its configuration; each call to
/// [`optimize`](Self::optimize) owns its tour, so one engine and one matrix
/// can serve any number of independent runs.
///
/// # Examples
///
/// ```
/// use u_twoopt::distance::DistanceMatrix;
/// use u_twoopt::local_search::TwoOptEngine;
///
/// // Unit square visited in crossing order 0 → 1 → 2 → 3.
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
/// let result = TwoOptEngine::default().optimize(&dm);
///
/// assert_eq!(result.tour.as_slice(), &[0, 2, 1, 3]);
/// assert!((result.tour.length(&dm) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TwoOptEngine {
    config: TwoOptConfig,
}

impl TwoOptEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: TwoOptConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &TwoOptConfig {
        &self.config
    }

    /// Optimizes the identity tour `[0, 1, ..., n-1]`.
    pub fn optimize(&self, distances: &DistanceMatrix) -> OptimizationResult {
        self.improve(distances, Tour::identity(distances.size()))
    }

    /// Optimizes from a caller-supplied starting tour.
    ///
    /// # Panics
    ///
    /// Panics if `tour` doesn't have exactly `distances.size()` nodes.
    pub fn improve(&self, distances: &DistanceMatrix, mut tour: Tour) -> OptimizationResult {
        assert_eq!(
            tour.len(),
            distances.size(),
            "tour and distance matrix sizes differ"
        );
        debug!(
            n = tour.len(),
            max_iterations = self.config.max_iterations,
            "2-opt run started"
        );

        let mut total_improvement = 0.0;
        let mut iterations = 0;
        let mut termination = Termination::CappedOut;

        while iterations < self.config.max_iterations {
            let delta = two_opt_first_improvement(&mut tour, distances, self.config.epsilon);
            if delta >= 0.0 {
                termination = Termination::Converged;
                break;
            }
            total_improvement += delta;
            iterations += 1;
            trace!(iteration = iterations, delta, "accepted 2-opt move");
        }

        debug!(
            iterations,
            total_improvement,
            ?termination,
            "2-opt run finished"
        );

        OptimizationResult {
            tour,
            total_improvement,
            iterations,
            termination,
        }
    }
}

/// Applies the first improving 2-opt move found in scan order.
///
/// Returns the (strictly negative) delta of the applied move, or `0.0` if no
/// pair improves by more than `epsilon`, in which case the tour is left
/// untouched.
///
/// # Examples
///
/// ```
/// use u_twoopt::distance::DistanceMatrix;
/// use u_twoopt::local_search::two_opt_first_improvement;
/// use u_twoopt::models::Tour;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
/// let mut tour = Tour::identity(4);
///
/// let delta = two_opt_first_improvement(&mut tour, &dm, 1e-10);
/// assert!(delta < 0.0);
/// assert_eq!(two_opt_first_improvement(&mut tour, &dm, 1e-10), 0.0);
/// ```
pub fn two_opt_first_improvement(tour: &mut Tour, distances: &DistanceMatrix, epsilon: f64) -> f64 {
    match find_improving_move(tour, distances, epsilon) {
        Some((i, j, delta)) => {
            tour.reverse_segment(i + 1, j);
            delta
        }
        None => 0.0,
    }
}

/// Returns the first improving move `(i, j, delta)` in scan order without
/// applying it.
///
/// `None` means `tour` is a 2-opt local optimum for the given threshold.
pub fn local_optimum_violation(
    tour: &Tour,
    distances: &DistanceMatrix,
    epsilon: f64,
) -> Option<(usize, usize, f64)> {
    find_improving_move(tour, distances, epsilon)
}

/// Computes the length change of the 2-opt move at positions `i` and `j`.
///
/// Before: ... - t[i] - t[i+1] - ... - t[j] - t[j+1] - ...
/// After:  ... - t[i] - t[j] - ... - t[i+1] - t[j+1] - ...
///
/// # Panics
///
/// Panics if `i + 1` or `j` is not a valid position.
pub fn two_opt_delta(tour: &Tour, distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour.node(i);
    let b = tour.node(i + 1);
    let c = tour.node(j);
    let d = tour.node((j + 1) % n);

    distances.get(a, c) + distances.get(b, d) - distances.get(a, b) - distances.get(c, d)
}

fn find_improving_move(
    tour: &Tour,
    distances: &DistanceMatrix,
    epsilon: f64,
) -> Option<(usize, usize, f64)> {
    let n = tour.len();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 2)..n {
            let delta = two_opt_delta(tour, distances, i, j);
            if delta < -epsilon {
                return Some((i, j, delta));
            }
        }
    }
    None
}
