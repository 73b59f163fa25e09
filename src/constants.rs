//! Physical constants
use anise::constants::SPEED_OF_LIGHT_KM_S;

/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = SPEED_OF_LIGHT_KM_S * 1000.0;

/// Earth gravitational constant, in m³.s⁻²
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004418E14;

/// Sun gravitational constant, in m³.s⁻²
pub const SUN_GRAVITATION_MU_M3_S2: f64 = 1.32712440018E20;

/// Earth rotation rate, in rad.s⁻¹
pub const EARTH_ANGULAR_VEL_RAD_S: f64 = 7.2921151467E-5;
