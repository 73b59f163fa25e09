#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod bias;
mod cfg;
mod constants;
mod error;
mod orbit;
mod propagation;
mod solver;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::{
        bias::{EnvironmentalDelay, NullDelay},
        cfg::{Algorithm, Config},
        constants::{
            EARTH_ANGULAR_VEL_RAD_S, EARTH_GRAVITATION_MU_M3_S2, SPEED_OF_LIGHT_M_S,
            SUN_GRAVITATION_MU_M3_S2,
        },
        error::Error,
        orbit::OrbitSource,
        propagation::{FixedDate, SignalPropagation},
        solver::Solver,
    };
    // re-export
    pub use anise::{
        math::rotation::DCM,
        prelude::{Almanac, Frame, Orbit},
    };
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::{Matrix3, Vector3};
}

// pub export
pub use error::Error;
