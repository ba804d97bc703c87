//! Repeated-run timing harness.
//!
//! Calls [`TwoOptEngine::optimize`] several times on the same matrix and
//! averages the wall-clock time per call. Every run is independent and
//! deterministic, so only the first run's result is kept.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::local_search::TwoOptEngine;
use crate::models::OptimizationResult;

/// Number of repetitions used when none is given.
pub const DEFAULT_RUNS: usize = 10;

/// Outcome of [`benchmark`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Result of the first run.
    pub result: OptimizationResult,
    /// Number of runs performed.
    pub runs: usize,
    /// Wall-clock time summed over all runs.
    #[serde(serialize_with = "as_secs")]
    pub total: Duration,
    /// Mean wall-clock time per run.
    #[serde(serialize_with = "as_secs")]
    pub average: Duration,
}

/// Runs `engine` on `distances` `runs` times (at least once).
///
/// # Examples
///
/// ```
/// use u_twoopt::bench::benchmark;
/// use u_twoopt::generate::random_euclidean;
/// use u_twoopt::local_search::TwoOptEngine;
///
/// let dm = random_euclidean(30, 3);
/// let report = benchmark(&TwoOptEngine::default(), &dm, 3);
/// assert_eq!(report.runs, 3);
/// assert!(report.result.tour.is_permutation());
/// assert!(report.to_string().contains("Average time spent:"));
/// ```
pub fn benchmark(engine: &TwoOptEngine, distances: &DistanceMatrix, runs: usize) -> BenchmarkReport {
    let runs = runs.max(1);
    let (result, mut total) = timed_run(engine, distances, 0);

    for run in 1..runs {
        let (_, elapsed) = timed_run(engine, distances, run);
        total += elapsed;
    }

    BenchmarkReport {
        result,
        runs,
        total,
        average: mean_duration(total, runs),
    }
}

/// `total / runs` without truncating `runs` to the `u32` that `Duration`
/// division takes.
fn mean_duration(total: Duration, runs: usize) -> Duration {
    match u32::try_from(runs) {
        Ok(runs) => total / runs,
        Err(_) => total.div_f64(runs as f64),
    }
}

fn timed_run(
    engine: &TwoOptEngine,
    distances: &DistanceMatrix,
    run: usize,
) -> (OptimizationResult, Duration) {
    let start = Instant::now();
    let result = engine.optimize(distances);
    let elapsed = start.elapsed();
    debug!(run, elapsed_us = elapsed.as_micros() as u64, "benchmark run");
    (result, elapsed)
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimized tour: {}", self.result.tour)?;
        writeln!(f, "Total improvement: {:.6}", self.result.improvement())?;
        writeln!(f, "Iterations: {}", self.result.iterations)?;
        write!(f, "Average time spent: {:.6} seconds", self.average.as_secs_f64())
    }
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
