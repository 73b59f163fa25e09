//! Solver configuration
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::prelude::{Error, Solver};

mod algorithm;

pub use algorithm::Algorithm;

/// 1 picosecond on each time of flight update, which corresponds
/// to sub millimeter geometry stability.
const fn default_threshold_s() -> f64 {
    1.0E-12
}

/// Generous iteration budget: direct substitution contracts by about
/// the endpoint speed over the speed of light on each pass, Newton
/// updates converge faster still.
const fn default_max_iters() -> usize {
    50
}

/// [Config] gathers the convergence settings that a [Solver] applies
/// to every resolution. Once the [Solver] is built, the settings
/// never change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Convergence threshold (in seconds) applied to each time of flight
    /// update. The iteration is carried in double precision seconds, so
    /// sub nanosecond values are meaningful. Must remain strictly positive.
    /// Default is 1E-12 s.
    #[cfg_attr(feature = "serde", serde(default = "default_threshold_s"))]
    pub threshold_s: f64,

    /// Iteration budget: exhausting it without meeting [Config::threshold_s]
    /// aborts the resolution with [Error::ConvergenceFailure].
    /// Must remain non null. Default is 50.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iters"))]
    pub max_iters: usize,

    /// Root finding [Algorithm]. Default is [Algorithm::Newton].
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_s: default_threshold_s(),
            max_iters: default_max_iters(),
            algorithm: Algorithm::default(),
        }
    }
}

impl Config {
    /// Returns [Config] with updated convergence threshold (in seconds).
    pub fn with_threshold_s(&self, threshold_s: f64) -> Self {
        let mut s = *self;
        s.threshold_s = threshold_s;
        s
    }

    /// Returns [Config] with updated iteration budget.
    pub fn with_max_iters(&self, max_iters: usize) -> Self {
        let mut s = *self;
        s.max_iters = max_iters;
        s
    }

    /// Returns [Config] with updated root finding [Algorithm].
    pub fn with_algorithm(&self, algorithm: Algorithm) -> Self {
        let mut s = *self;
        s.algorithm = algorithm;
        s
    }
}
