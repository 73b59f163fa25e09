//! Signal propagation geometry
use std::str::FromStr;

use anise::math::Vector6;

use crate::{
    constants::SPEED_OF_LIGHT_M_S,
    prelude::{Duration, Epoch, Error, Frame, Matrix3, Orbit, Vector3, DCM},
};

#[cfg(doc)]
use crate::prelude::{EnvironmentalDelay, Solver};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod derivatives;
mod shapiro;

/// [FixedDate] designates which end of the signal exchange the caller
/// supplied [Epoch] anchors. The solver then resolves the other end.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FixedDate {
    /// The anchor [Epoch] is the emission instant: reception is resolved,
    /// past the anchor.
    #[cfg_attr(feature = "serde", serde(alias = "emission", alias = "tx"))]
    Emission,
    /// The anchor [Epoch] is the reception instant: emission is resolved,
    /// prior the anchor.
    #[cfg_attr(feature = "serde", serde(alias = "reception", alias = "rx"))]
    Reception,
}

impl std::fmt::Display for FixedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Emission => write!(f, "emission"),
            Self::Reception => write!(f, "reception"),
        }
    }
}

impl FromStr for FixedDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();

        match trimmed.as_str() {
            "emission" | "tx" => Ok(Self::Emission),
            "reception" | "rx" => Ok(Self::Reception),
            _ => Err(Error::UnknownFixedDate),
        }
    }
}

/// [SignalPropagation] is the converged space-time geometry of one signal
/// exchange: the emitter state at the emission instant, coupled to the
/// receiver state at the reception instant, both expressed in the same
/// [Frame]. On top of the direct geometry (propagation vector, line of
/// sight, time of flight), it exposes analytic partial derivatives and
/// the relativistic (Shapiro) path delay.
#[derive(Debug, Clone, Copy)]
pub struct SignalPropagation {
    /// Emitter [Orbit]al state at the emission instant
    tx_orbit: Orbit,
    /// Receiver [Orbit]al state at the reception instant
    rx_orbit: Orbit,
    /// End of the exchange the anchor [Epoch] fixed
    fixed_date: FixedDate,
}

impl SignalPropagation {
    /// Couples two already resolved endpoint states into a [SignalPropagation].
    /// This is how the [Solver] publishes its findings, and remains available
    /// to applications that obtain both states by other means.
    ///
    /// ## Input
    /// - tx_orbit: emitter state at the emission instant
    /// - rx_orbit: receiver state at the reception instant
    /// - fixed_date: [FixedDate] convention this geometry was resolved with
    pub fn new(tx_orbit: Orbit, rx_orbit: Orbit, fixed_date: FixedDate) -> Result<Self, Error> {
        if tx_orbit.frame.ephemeris_id != rx_orbit.frame.ephemeris_id
            || tx_orbit.frame.orientation_id != rx_orbit.frame.orientation_id
        {
            return Err(Error::FrameMismatch);
        }

        if rx_orbit.epoch < tx_orbit.epoch {
            return Err(Error::PhysicalNonSenseRxPriorTx);
        }

        let s = Self {
            tx_orbit,
            rx_orbit,
            fixed_date,
        };

        if s.distance_m() == 0.0 {
            return Err(Error::DegenerateGeometry);
        }

        Ok(s)
    }

    /// Emission [Epoch]
    pub fn tx_epoch(&self) -> Epoch {
        self.tx_orbit.epoch
    }

    /// Reception [Epoch]
    pub fn rx_epoch(&self) -> Epoch {
        self.rx_orbit.epoch
    }

    /// [Frame] both endpoint states are expressed in
    pub fn frame(&self) -> Frame {
        self.rx_orbit.frame
    }

    /// [FixedDate] convention this geometry was resolved with
    pub fn fixed_date(&self) -> FixedDate {
        self.fixed_date
    }

    /// Emitter [Orbit]al state at [Self::tx_epoch]
    pub fn tx_orbit(&self) -> Orbit {
        self.tx_orbit
    }

    /// Receiver [Orbit]al state at [Self::rx_epoch]
    pub fn rx_orbit(&self) -> Orbit {
        self.rx_orbit
    }

    /// Emitter position at the emission instant, in meters
    pub fn tx_position_m(&self) -> Vector3<f64> {
        self.tx_orbit.radius_km * 1.0E3
    }

    /// Emitter velocity at the emission instant, in m.s⁻¹
    pub fn tx_velocity_m_s(&self) -> Vector3<f64> {
        self.tx_orbit.velocity_km_s * 1.0E3
    }

    /// Receiver position at the reception instant, in meters
    pub fn rx_position_m(&self) -> Vector3<f64> {
        self.rx_orbit.radius_km * 1.0E3
    }

    /// Receiver velocity at the reception instant, in m.s⁻¹
    pub fn rx_velocity_m_s(&self) -> Vector3<f64> {
        self.rx_orbit.velocity_km_s * 1.0E3
    }

    /// Propagation vector, in meters: from the emitter at emission
    /// to the receiver at reception.
    pub fn vector_m(&self) -> Vector3<f64> {
        self.rx_position_m() - self.tx_position_m()
    }

    /// Propagation distance, in meters
    pub fn distance_m(&self) -> f64 {
        self.vector_m().norm()
    }

    /// Unit line of sight, from the emitter at emission towards the
    /// receiver at reception.
    pub fn los_unit(&self) -> Vector3<f64> {
        self.vector_m() / self.distance_m()
    }

    /// Time of flight, in seconds at full precision: the propagation
    /// distance over the speed of light, exactly consistent with
    /// [Self::vector_m].
    pub fn time_of_flight_s(&self) -> f64 {
        self.distance_m() / SPEED_OF_LIGHT_M_S
    }

    /// Time of flight as the [Duration] separating [Self::rx_epoch]
    /// from [Self::tx_epoch], with 1 ns granularity.
    pub fn time_of_flight(&self) -> Duration {
        self.rx_orbit.epoch - self.tx_orbit.epoch
    }

    /// Emitter elevation above the receiver local horizon, in degrees,
    /// the zenith being taken radially (from the [Frame] center through
    /// the receiver). This is the elevation angle [EnvironmentalDelay]
    /// implementations expect. Returns [f64::NAN] for a receiver located
    /// at the [Frame] center itself, where no local zenith exists.
    pub fn rx_elevation_deg(&self) -> f64 {
        let rx_m = self.rx_position_m();
        let zenith = rx_m / rx_m.norm();
        let rx_to_tx = -self.los_unit();
        rx_to_tx.dot(&zenith).clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Returns this [SignalPropagation] re-expressed in another [Frame],
    /// possibly rotating (typically: body fixed). Both endpoint states are
    /// rotated by the provided [DCM]: positions by the rotation matrix,
    /// velocities picking up the transport term when the rotation rate is
    /// defined. A single [DCM] applies to both instants: for time dependent
    /// rotations, it freezes the target axes at the [Epoch] it was sampled
    /// at, which should be the anchor [Epoch].
    ///
    /// ## Input
    /// - frame: target [Frame]
    /// - dcm: [DCM] from [Self::frame] to the target [Frame]
    pub fn with_frame(&self, frame: Frame, dcm: &DCM) -> Result<Self, Error> {
        let tx_orbit = Self::rotated_state(&self.tx_orbit, frame, dcm);
        let rx_orbit = Self::rotated_state(&self.rx_orbit, frame, dcm);
        Self::new(tx_orbit, rx_orbit, self.fixed_date)
    }

    fn rotated_state(orbit: &Orbit, frame: Frame, dcm: &DCM) -> Orbit {
        let rot_dt = dcm.rot_mat_dt.unwrap_or_else(Matrix3::zeros);

        let r_km = dcm.rot_mat * orbit.radius_km;
        let v_km_s = dcm.rot_mat * orbit.velocity_km_s + rot_dt * orbit.radius_km;

        Orbit::from_cartesian_pos_vel(
            Vector6::new(r_km[0], r_km[1], r_km[2], v_km_s[0], v_km_s[1], v_km_s[2]),
            orbit.epoch,
            frame,
        )
    }

    /// Velocity (in m.s⁻¹) of the endpoint the iteration solved for,
    /// which drives every implicit derivative of this geometry.
    pub(crate) fn solved_velocity_m_s(&self) -> Vector3<f64> {
        match self.fixed_date {
            FixedDate::Emission => self.rx_velocity_m_s(),
            FixedDate::Reception => self.tx_velocity_m_s(),
        }
    }

    /// Slope (in m.s⁻¹) of the light-time residual along the solved instant:
    /// the speed of light minus the solved endpoint velocity projected on the
    /// line of sight. Strictly positive for subluminal endpoints.
    pub(crate) fn residual_slope_m_s(&self) -> f64 {
        SPEED_OF_LIGHT_M_S - self.los_unit().dot(&self.solved_velocity_m_s())
    }
}
