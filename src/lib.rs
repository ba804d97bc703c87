//! # u-twoopt
//!
//! Approximate solutions to the symmetric Traveling Salesman Problem with
//! deterministic first-improvement 2-opt local search over a dense
//! distance matrix.
//!
//! ## Modules
//!
//! - [`distance`] — Read-only dense distance matrix
//! - [`models`] — Tour and optimization result types
//! - [`local_search`] — 2-opt move evaluation and improvement loop
//! - [`config`] — Iteration cap and improvement threshold, loadable from TOML
//! - [`io`] — Whitespace text format for distance matrices
//! - [`generate`] — Random Euclidean instances
//! - [`bench`] — Repeated-run timing harness and console report
//!
//! ## Example
//!
//! ```
//! use u_twoopt::io::parse_matrix;
//! use u_twoopt::local_search::TwoOptEngine;
//!
//! let dm = parse_matrix("4\n0 1 9 1\n1 0 1 9\n9 1 0 1\n1 9 1 0\n").unwrap();
//! let result = TwoOptEngine::default().optimize(&dm);
//! assert_eq!(result.iterations, 0);
//! assert_eq!(result.tour.as_slice(), &[0, 1, 2, 3]);
//! ```

pub mod bench;
pub mod config;
pub mod distance;
pub mod generate;
pub mod io;
pub mod local_search;
pub mod models;
