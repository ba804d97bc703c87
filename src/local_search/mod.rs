//! Local search over closed tours.
//!
//! - [`two_opt`] — first-improvement 2-opt edge exchange and its driving loop

mod two_opt;

pub use two_opt::{
    local_optimum_violation, two_opt_delta, two_opt_first_improvement, TwoOptEngine,
};
