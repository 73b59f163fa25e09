use thiserror::Error;

use anise::errors::PhysicsError;

use crate::prelude::Epoch;

#[cfg(doc)]
use crate::prelude::{Algorithm, Config, FixedDate, Frame, OrbitSource, SignalPropagation, Solver};

/// [Error]s reported by the light-time resolution process.
/// Most are physical and should be handled candidly.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The working [Frame] orientation is time dependent. The light-time
    /// iteration and every analytic derivative require inertial axes:
    /// select an inertial [Frame] (J2000, ECLIPJ2000..) and request
    /// rotating expressions afterwards, on the resolved [SignalPropagation].
    #[error("non inertial working frame")]
    NonInertialFrame,

    /// [Config] settings must remain physically sound.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The iteration budget was exhausted before the time of flight update
    /// met the convergence threshold. We report the last update (in seconds)
    /// and the number of iterations spent: the retry policy belongs to the
    /// caller (loosen the threshold, raise the budget or switch [Algorithm]).
    #[error("no convergence after {iterations} iteration(s): residual={residual_s}s")]
    ConvergenceFailure { residual_s: f64, iterations: usize },

    /// Both endpoints resolve to the very same point: the line of sight
    /// does not exist and neither does any derived quantity.
    #[error("degenerate geometry (coincident endpoints)")]
    DegenerateGeometry,

    /// Corrupt trajectory data may resolve a reception prior the emission
    /// itself, which is physically impossible.
    #[error("physical non sense: rx prior tx")]
    PhysicalNonSenseRxPriorTx,

    /// An [OrbitSource] failed to describe its trajectory at requested [Epoch]:
    /// resolution is abandoned.
    #[error("unresolved state at {0}")]
    UnresolvedState(Epoch),

    /// Endpoint states no longer expressed in one consistent [Frame].
    #[error("endpoint frames mismatch")]
    FrameMismatch,

    /// Failed to parse [Algorithm] specs
    #[error("non supported/invalid algorithm")]
    UnknownAlgorithm,

    /// Failed to parse [FixedDate] specs
    #[error("non supported/invalid fixed date")]
    UnknownFixedDate,

    /// Any physical non sense reported by ANISE will cause the ongoing
    /// process to abort with this error.
    #[error("physics issue: {0}")]
    Physics(PhysicsError),
}
