use std::str::FromStr;

use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Root finding scheme applied to the implicit light-time equation.
/// Both schemes converge to the same figure, within the configured
/// threshold: the difference lies in how many trajectory evaluations
/// each resolution costs.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Direct substitution of the time of flight by the propagation
    /// distance over the speed of light. One trajectory evaluation per
    /// pass, contraction goes as the endpoint speed over the speed of
    /// light.
    #[cfg_attr(feature = "serde", serde(alias = "fixed-point", alias = "fixedpoint"))]
    FixedPoint,
    /// Residual updates linearized along the solved endpoint velocity.
    /// Converges in very few passes, even on fast moving endpoints
    /// (low orbiters). Default choice.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "newton"))]
    Newton,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FixedPoint => write!(f, "FixedPoint"),
            Self::Newton => write!(f, "Newton"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();

        match trimmed.as_str() {
            "fixedpoint" | "fixed-point" => Ok(Self::FixedPoint),
            "newton" => Ok(Self::Newton),
            _ => Err(Error::UnknownAlgorithm),
        }
    }
}
