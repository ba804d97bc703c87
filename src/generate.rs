//! Random Euclidean instances.
//!
//! Points are drawn uniformly from the square `[0, 100) × [0, 100)` and the
//! matrix holds their pairwise Euclidean distances with a zero diagonal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::DistanceMatrix;

/// Side length of the square points are drawn from.
pub const SIDE: f64 = 100.0;

/// Draws `n` points uniformly from `[0, SIDE)²`.
pub fn random_points<R: Rng>(n: usize, rng: &mut R) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| (rng.random_range(0.0..SIDE), rng.random_range(0.0..SIDE)))
        .collect()
}

/// Builds a random Euclidean instance, reproducible for a given `seed`.
///
/// # Examples
///
/// ```
/// use u_twoopt::generate::random_euclidean;
///
/// let dm = random_euclidean(20, 42);
/// assert_eq!(dm.size(), 20);
/// assert!(dm.is_symmetric(0.0));
/// assert_eq!(dm, random_euclidean(20, 42));
/// ```
pub fn random_euclidean(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    DistanceMatrix::from_points(&random_points(n, &mut rng))
}
