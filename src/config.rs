//! Engine configuration.
//!
//! The defaults reproduce the reference behavior: at most 10 000 accepted
//! moves, and a move only counts as improving when its delta is below
//! `-1e-10`. Both knobs can be loaded from TOML.
//!
//! # Examples
//!
//! ```
//! use u_twoopt::config::TwoOptConfig;
//!
//! let config = TwoOptConfig::from_toml_str("max_iterations = 500").unwrap();
//! assert_eq!(config.max_iterations, 500);
//! assert_eq!(config.epsilon, 1e-10);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on accepted moves per run.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Default improvement threshold.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters of a 2-opt run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwoOptConfig {
    /// Maximum number of accepted moves before the run is cut off.
    pub max_iterations: usize,
    /// A move is accepted only when `delta < -epsilon`.
    pub epsilon: f64,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl TwoOptConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, isn't valid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the improvement threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that `epsilon` is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
