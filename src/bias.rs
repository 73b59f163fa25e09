//! Environmental delays
use crate::prelude::Epoch;

#[cfg(doc)]
use crate::prelude::SignalPropagation;

/// Environment perturbation models (troposphere, ionosphere..) must
/// implement [EnvironmentalDelay]. The solver itself never folds such
/// delays into the resolved time of flight: combining them belongs to
/// the application. [SignalPropagation] provides the reception geometry
/// (reception [Epoch], emitter elevation) these models consume.
pub trait EnvironmentalDelay {
    /// Excess propagation delay (in seconds) applying at the reception site.
    ///
    /// ## Input
    /// - rx_epoch: reception [Epoch]
    /// - elevation_deg: emitter elevation above the receiver horizon,
    ///   in degrees
    fn signal_delay_s(&self, rx_epoch: Epoch, elevation_deg: f64) -> f64;
}

/// [NullDelay] for applications that do not account for environmental
/// perturbations.
pub struct NullDelay {}

impl EnvironmentalDelay for NullDelay {
    fn signal_delay_s(&self, _: Epoch, _: f64) -> f64 {
        0.0
    }
}
