//! Randomized geometry sweeps
use std::f64::consts::TAU;

use log::info;

use rand::{prelude::*, rngs::SmallRng, SeedableRng};

use crate::{
    prelude::{Algorithm, Config, Epoch, FixedDate, Frame, Solver, Vector3},
    tests::{data::LinearMotion, init_logger, t0_gpst},
};

use anise::constants::frames::EARTH_J2000;

/// Samples emitter and receiver trajectories on two radius shells and
/// verifies that every resolution lands on a consistent propagation,
/// whatever the scheme and the fixed date.
#[derive(Clone)]
pub struct GeometrySweep {
    /// Name of this sweep
    name: String,

    /// First anchor instant
    t0: Epoch,

    /// Resolution frame
    frame: Frame,

    /// Total number of random geometries
    num_points: usize,

    /// Emitter radius shell (in meters)
    tx_shell_m: (f64, f64),

    /// Receiver radius shell (in meters)
    rx_shell_m: (f64, f64),

    /// Upper bound on either endpoint speed (in m/s)
    max_speed_m_s: f64,
}

impl Default for GeometrySweep {
    fn default() -> Self {
        Self {
            name: "sweep".to_string(),
            t0: t0_gpst(),
            frame: EARTH_J2000,
            num_points: 64,
            tx_shell_m: (2.4E7, 2.8E7),
            rx_shell_m: (6.5E6, 7.5E6),
            max_speed_m_s: 8.0E3,
        }
    }
}

impl GeometrySweep {
    pub fn name(&self, name: &str) -> Self {
        let mut s = self.clone();
        s.name = name.to_string();
        s
    }

    pub fn rx_shell_m(&self, min_m: f64, max_m: f64) -> Self {
        let mut s = self.clone();
        s.rx_shell_m = (min_m, max_m);
        s
    }

    pub fn max_speed_m_s(&self, speed_m_s: f64) -> Self {
        let mut s = self.clone();
        s.max_speed_m_s = speed_m_s;
        s
    }

    fn random_direction(rng: &mut SmallRng) -> Vector3<f64> {
        let z: f64 = rng.random_range(-1.0..1.0);
        let azimuth_rad = rng.random_range(0.0..TAU);

        let in_plane = (1.0 - z * z).sqrt();

        Vector3::new(in_plane * azimuth_rad.cos(), in_plane * azimuth_rad.sin(), z)
    }

    fn random_endpoint(&self, rng: &mut SmallRng, shell_m: (f64, f64)) -> LinearMotion {
        let radius_m = rng.random_range(shell_m.0..shell_m.1);
        let speed_m_s = rng.random_range(0.0..self.max_speed_m_s);

        LinearMotion {
            t0: self.t0,
            pos_t0_m: radius_m * Self::random_direction(rng),
            velocity_m_s: speed_m_s * Self::random_direction(rng),
            frame: self.frame,
        }
    }

    pub fn run(&self) {
        init_logger();

        let mut generator = rand::rng();
        let mut rng = SmallRng::from_rng(&mut generator);

        let newton = Solver::new(self.frame, Config::default()).unwrap();

        let fixed_point = Solver::new(
            self.frame,
            Config::default().with_algorithm(Algorithm::FixedPoint),
        )
        .unwrap();

        for nth_point in 0..self.num_points {
            let emitter = self.random_endpoint(&mut rng, self.tx_shell_m);
            let receiver = self.random_endpoint(&mut rng, self.rx_shell_m);

            for fixed_date in [FixedDate::Emission, FixedDate::Reception] {
                let prop = newton
                    .resolve(&emitter, &receiver, self.t0, fixed_date)
                    .unwrap_or_else(|e| {
                        panic!(
                            "{} point {} - newton ({}) failed with {}",
                            self.name, nth_point, fixed_date, e
                        );
                    });

                let fp_prop = fixed_point
                    .resolve(&emitter, &receiver, self.t0, fixed_date)
                    .unwrap_or_else(|e| {
                        panic!(
                            "{} point {} - fixed-point ({}) failed with {}",
                            self.name, nth_point, fixed_date, e
                        );
                    });

                // anchored endpoint pinned, signal flies forward
                match fixed_date {
                    FixedDate::Emission => assert_eq!(prop.tx_epoch(), self.t0),
                    FixedDate::Reception => assert_eq!(prop.rx_epoch(), self.t0),
                }

                assert!(prop.rx_epoch() > prop.tx_epoch());

                // shells keep the crossing within [50, 130] ms
                let tof_s = prop.time_of_flight_s();
                assert!(
                    tof_s > 0.05 && tof_s < 0.13,
                    "{} point {} - {} crossing outside the shell band: {:.6E}s",
                    self.name,
                    nth_point,
                    fixed_date,
                    tof_s,
                );

                // instants are gridded to the nanosecond
                let separation_s = (prop.rx_epoch() - prop.tx_epoch()).to_seconds();
                assert!((separation_s - tof_s).abs() < 1.0E-9);

                // both schemes land on the same propagation
                assert!((fp_prop.time_of_flight_s() - tof_s).abs() < 4.0E-12);
                assert!((fp_prop.vector_m() - prop.vector_m()).norm() < 1.0E-4);
            }

            // reception anchored on the forward arrival recovers the
            // departure, to the grid
            let forward = newton
                .resolve(&emitter, &receiver, self.t0, FixedDate::Emission)
                .unwrap();

            let backward = newton
                .resolve(&emitter, &receiver, forward.rx_epoch(), FixedDate::Reception)
                .unwrap();

            let gap_nanos = (backward.tx_epoch() - self.t0).total_nanoseconds().abs();
            assert!(
                gap_nanos <= 1,
                "{} point {} - round trip off by {} ns",
                self.name,
                nth_point,
                gap_nanos
            );

            let drift_s = (backward.time_of_flight_s() - forward.time_of_flight_s()).abs();
            assert!(drift_s < 1.0E-12);

            info!("{}({}) - point {} - ok", self.name, self.frame, nth_point);
        }
    }
}

#[test]
fn medium_orbiters_to_low_orbiters() {
    GeometrySweep::default().name("meo-leo").run();
}

#[test]
fn medium_orbiters_to_ground_sites() {
    GeometrySweep::default()
        .name("meo-ground")
        .rx_shell_m(6.37E6, 6.38E6)
        .max_speed_m_s(500.0)
        .run();
}
