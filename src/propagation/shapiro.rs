//! Relativistic (Shapiro) path delay
use log::debug;

use crate::{constants::SPEED_OF_LIGHT_M_S, prelude::{Error, SignalPropagation}};

#[cfg(doc)]
use crate::prelude::Frame;

impl SignalPropagation {
    /// Shapiro delay (in seconds) this signal accumulated by crossing the
    /// gravitational well of the body sitting at the center of [Self::frame]:
    /// 2μ/c³·ln((r_tx + r_rx + r)/(r_tx + r_rx - r)). Grows as the line of
    /// sight grazes the body, amounts to a few tens of picoseconds for
    /// typical MEO to ground links around Earth.
    ///
    /// ## Input
    /// - mu_m3_s2: gravitational constant of the central body, in m³.s⁻²
    pub fn shapiro_delay_s(&self, mu_m3_s2: f64) -> f64 {
        let r_tx = self.tx_position_m().norm();
        let r_rx = self.rx_position_m().norm();
        let r_txrx = self.distance_m();

        let delay_s = 2.0 * mu_m3_s2 / SPEED_OF_LIGHT_M_S.powi(3)
            * ((r_tx + r_rx + r_txrx) / (r_tx + r_rx - r_txrx)).ln();

        debug!(
            "{}({}) - shapiro delay {:.3E}s",
            self.rx_epoch(),
            self.fixed_date(),
            delay_s
        );

        delay_s
    }

    /// [Self::shapiro_delay_s] with the gravitational constant picked up
    /// from [Self::frame] directly. Only available on [Frame]s that carry
    /// their gravitational parameter.
    pub fn frame_center_shapiro_delay_s(&self) -> Result<f64, Error> {
        let mu_km3_s2 = self.frame().mu_km3_s2().map_err(Error::Physics)?;
        Ok(self.shapiro_delay_s(mu_km3_s2 * 1.0E9))
    }

    /// Shapiro delay converted to a path range excess, in meters.
    ///
    /// ## Input
    /// - mu_m3_s2: gravitational constant of the central body, in m³.s⁻²
    pub fn relativistic_path_range_m(&self, mu_m3_s2: f64) -> f64 {
        self.shapiro_delay_s(mu_m3_s2) * SPEED_OF_LIGHT_M_S
    }
}
