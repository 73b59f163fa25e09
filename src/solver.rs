//! Light-time solver
use log::debug;

use anise::constants::orientations::J2000;

use crate::{
    cfg::{Algorithm, Config},
    constants::SPEED_OF_LIGHT_M_S,
    error::Error,
    orbit::OrbitSource,
    prelude::{Epoch, FixedDate, Frame, Orbit, SignalPropagation, Unit},
};

/// NAIF orientation IDs from 1 (J2000) to 21 designate the built-in
/// inertial orientations. Anything above is time dependent.
const MAX_INERTIAL_ORIENTATION_ID: i32 = 21;

fn is_pseudo_inertial(frame: &Frame) -> bool {
    (J2000..=MAX_INERTIAL_ORIENTATION_ID).contains(&frame.orientation_id)
}

/// [Solver] resolves the exact space-time geometry of signals exchanged
/// between two moving platforms, by iterating the implicit light-time
/// equation in an inertial working [Frame]. Fully immutable once built:
/// resolutions never modify it, and a single instance may be shared by
/// any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    /// Inertial working [Frame], verified at construction.
    frame: Frame,
    /// Convergence settings, verified at construction.
    cfg: Config,
}

impl Solver {
    /// Builds a new [Solver], which may serve any number of resolutions.
    ///
    /// ## Input
    /// - frame: working [Frame] the iteration is carried in. Its orientation
    ///   must be inertial (J2000, ECLIPJ2000..): time dependent orientations are
    ///   rejected with [Error::NonInertialFrame].
    /// - cfg: [Config]uration settings
    pub fn new(frame: Frame, cfg: Config) -> Result<Self, Error> {
        if !is_pseudo_inertial(&frame) {
            return Err(Error::NonInertialFrame);
        }

        if !cfg.threshold_s.is_finite() || cfg.threshold_s <= 0.0 {
            return Err(Error::InvalidConfig("threshold_s must be finite and strictly positive"));
        }

        if cfg.max_iters == 0 {
            return Err(Error::InvalidConfig("max_iters must be non null"));
        }

        Ok(Self { frame, cfg })
    }

    /// Working [Frame] this [Solver] iterates in
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Convergence settings this [Solver] applies
    pub fn cfg(&self) -> Config {
        self.cfg
    }

    /// Resolves the [SignalPropagation] geometry coupling these two
    /// endpoints around the anchor [Epoch].
    ///
    /// ## Input
    /// - emitter: emitting endpoint trajectory, as [OrbitSource]
    /// - receiver: receiving endpoint trajectory, as [OrbitSource]
    /// - t: anchor [Epoch], fixing either the emission or the reception
    ///   instant
    /// - fixed_date: [FixedDate] convention stating which end `t` anchors
    pub fn resolve<E: OrbitSource, R: OrbitSource>(
        &self,
        emitter: &E,
        receiver: &R,
        t: Epoch,
        fixed_date: FixedDate,
    ) -> Result<SignalPropagation, Error> {
        self.trace_native_frames(emitter, receiver, t);

        let anchored = match fixed_date {
            FixedDate::Emission => self.resolved_state(emitter.state_at(t, self.frame), t)?,
            FixedDate::Reception => self.resolved_state(receiver.state_at(t, self.frame), t)?,
        };

        let anchored_pos_m = anchored.radius_km * 1.0E3;

        let mut tof_s = 0.0_f64;
        let mut iterations = 0;
        let mut residual_s = f64::INFINITY;
        let mut converged = false;

        while iterations < self.cfg.max_iters {
            iterations += 1;

            let solved_epoch = Self::solved_epoch(t, tof_s, fixed_date);
            let solved = self.solved_state(emitter, receiver, solved_epoch, fixed_date)?;
            let solved_pos_m = solved.radius_km * 1.0E3;

            // propagation vector, always tx towards rx
            let w_m = match fixed_date {
                FixedDate::Emission => solved_pos_m - anchored_pos_m,
                FixedDate::Reception => anchored_pos_m - solved_pos_m,
            };

            let distance_m = w_m.norm();

            let d_tau = match self.cfg.algorithm {
                Algorithm::FixedPoint => distance_m / SPEED_OF_LIGHT_M_S - tof_s,
                Algorithm::Newton => {
                    let slope_m_s = if distance_m > 0.0 {
                        let v_m_s = solved.velocity_km_s * 1.0E3;
                        SPEED_OF_LIGHT_M_S - (w_m / distance_m).dot(&v_m_s)
                    } else {
                        SPEED_OF_LIGHT_M_S
                    };
                    (distance_m - SPEED_OF_LIGHT_M_S * tof_s) / slope_m_s
                },
            };

            if !d_tau.is_finite() {
                return Err(Error::ConvergenceFailure {
                    residual_s: d_tau,
                    iterations,
                });
            }

            tof_s += d_tau;
            residual_s = d_tau.abs();

            debug!(
                "{}({}) - iter={} tof={:.6E}s update={:.3E}s",
                t, fixed_date, iterations, tof_s, d_tau
            );

            if residual_s < self.cfg.threshold_s {
                converged = true;
                break;
            }
        }

        if !converged {
            return Err(Error::ConvergenceFailure {
                residual_s,
                iterations,
            });
        }

        let solved_epoch = Self::solved_epoch(t, tof_s, fixed_date);
        let solved = self.solved_state(emitter, receiver, solved_epoch, fixed_date)?;

        let (tx_orbit, rx_orbit) = match fixed_date {
            FixedDate::Emission => (anchored, solved),
            FixedDate::Reception => (solved, anchored),
        };

        let propagation = SignalPropagation::new(tx_orbit, rx_orbit, fixed_date)?;

        debug!(
            "{}({}) - converged in {} iteration(s), time of flight: {}",
            t,
            fixed_date,
            iterations,
            propagation.time_of_flight()
        );

        Ok(propagation)
    }

    /// Instant the solved endpoint is evaluated at: past the anchor when
    /// emission is fixed, prior the anchor when reception is.
    fn solved_epoch(t: Epoch, tof_s: f64, fixed_date: FixedDate) -> Epoch {
        match fixed_date {
            FixedDate::Emission => t + tof_s * Unit::Second,
            FixedDate::Reception => t - tof_s * Unit::Second,
        }
    }

    /// Evaluates the solved endpoint (the one opposite the anchor).
    fn solved_state<E: OrbitSource, R: OrbitSource>(
        &self,
        emitter: &E,
        receiver: &R,
        epoch: Epoch,
        fixed_date: FixedDate,
    ) -> Result<Orbit, Error> {
        match fixed_date {
            FixedDate::Emission => self.resolved_state(receiver.state_at(epoch, self.frame), epoch),
            FixedDate::Reception => self.resolved_state(emitter.state_at(epoch, self.frame), epoch),
        }
    }

    fn resolved_state(&self, state: Option<Orbit>, epoch: Epoch) -> Result<Orbit, Error> {
        let state = state.ok_or(Error::UnresolvedState(epoch))?;

        if state.frame.ephemeris_id != self.frame.ephemeris_id
            || state.frame.orientation_id != self.frame.orientation_id
        {
            return Err(Error::FrameMismatch);
        }

        Ok(state)
    }

    fn trace_native_frames<E: OrbitSource, R: OrbitSource>(
        &self,
        emitter: &E,
        receiver: &R,
        t: Epoch,
    ) {
        let native = emitter.native_frame(t);

        if native.orientation_id != self.frame.orientation_id {
            debug!("{}(emitter) - natively {}, requesting {}", t, native, self.frame);
        }

        let native = receiver.native_frame(t);

        if native.orientation_id != self.frame.orientation_id {
            debug!("{}(receiver) - natively {}, requesting {}", t, native, self.frame);
        }
    }
}
