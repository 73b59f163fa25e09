//! Analytic partial derivatives of the converged geometry.
//!
//! The time of flight is only implicitly defined, so every derivative
//! here accounts for the solved instant sliding as the differentiation
//! variable moves: a receiver shift changes the propagation distance,
//! which changes the time of flight, which re-evaluates the solved
//! endpoint along its own velocity. All formulas share the residual
//! slope k = c - u·Vs, where u is the unit line of sight and Vs the
//! solved endpoint velocity.
use crate::{
    prelude::{Matrix3, SignalPropagation, Vector3, DCM},
    propagation::FixedDate,
};

use crate::constants::SPEED_OF_LIGHT_M_S;

impl SignalPropagation {
    /// Jacobian (3x3, dimensionless) of the propagation vector with respect
    /// to a receiver position shift: I + Vs·uᵀ/k. Identity for a static
    /// receiver resolution.
    ///
    /// ## Input
    /// - dcm: optional [DCM] re-expressing the derivative in another frame,
    ///   None to remain in [Self::frame]
    pub fn vector_rx_position_jacobian(&self, dcm: Option<&DCM>) -> Matrix3<f64> {
        let u = self.los_unit();
        let v_s = self.solved_velocity_m_s();
        let k = self.residual_slope_m_s();

        let jacobian = Matrix3::identity() + v_s * u.transpose() / k;
        Self::re_expressed_jacobian(jacobian, dcm)
    }

    /// Jacobian (3x3, dimensionless) of the propagation vector with respect
    /// to an emitter position shift: exact opposite of
    /// [Self::vector_rx_position_jacobian].
    ///
    /// ## Input
    /// - dcm: optional [DCM] re-expressing the derivative in another frame,
    ///   None to remain in [Self::frame]
    pub fn vector_tx_position_jacobian(&self, dcm: Option<&DCM>) -> Matrix3<f64> {
        -self.vector_rx_position_jacobian(dcm)
    }

    /// Derivative (in m.s⁻¹) of the propagation vector with respect to the
    /// anchor instant, both trajectories held fixed.
    ///
    /// ## Input
    /// - dcm: optional [DCM] re-expressing the derivative in another frame,
    ///   None to remain in [Self::frame]. A defined rotation rate
    ///   contributes the transport term of the moving axes.
    pub fn vector_time_derivative_m_s(&self, dcm: Option<&DCM>) -> Vector3<f64> {
        let u = self.los_unit();
        let v_tx = self.tx_velocity_m_s();
        let v_rx = self.rx_velocity_m_s();
        let k = self.residual_slope_m_s();

        let w_dot = match self.fixed_date {
            FixedDate::Emission => v_rx * ((SPEED_OF_LIGHT_M_S - u.dot(&v_tx)) / k) - v_tx,
            FixedDate::Reception => v_rx - v_tx * ((SPEED_OF_LIGHT_M_S - u.dot(&v_rx)) / k),
        };

        match dcm {
            None => w_dot,
            Some(dcm) => {
                let transport = match dcm.rot_mat_dt {
                    Some(rot_mat_dt) => rot_mat_dt * self.vector_m(),
                    None => Vector3::zeros(),
                };
                dcm.rot_mat * w_dot + transport
            },
        }
    }

    /// Gradient (in s.m⁻¹) of the time of flight with respect to a receiver
    /// position shift: u/k.
    ///
    /// ## Input
    /// - dcm: optional [DCM] re-expressing the derivative in another frame,
    ///   None to remain in [Self::frame]
    pub fn tof_rx_position_gradient_s_m(&self, dcm: Option<&DCM>) -> Vector3<f64> {
        let gradient = self.los_unit() / self.residual_slope_m_s();

        match dcm {
            None => gradient,
            Some(dcm) => dcm.rot_mat * gradient,
        }
    }

    /// Gradient (in s.m⁻¹) of the time of flight with respect to an emitter
    /// position shift: exact opposite of [Self::tof_rx_position_gradient_s_m].
    ///
    /// ## Input
    /// - dcm: optional [DCM] re-expressing the derivative in another frame,
    ///   None to remain in [Self::frame]
    pub fn tof_tx_position_gradient_s_m(&self, dcm: Option<&DCM>) -> Vector3<f64> {
        -self.tof_rx_position_gradient_s_m(dcm)
    }

    /// Derivative (dimensionless, s/s) of the time of flight with respect
    /// to the anchor instant, both trajectories held fixed: u·(Vrx - Vtx)/k.
    /// Scalar quantity: identical in any rigidly rotated expression frame,
    /// hence no re-expression parameter.
    pub fn tof_time_derivative(&self) -> f64 {
        let u = self.los_unit();
        let relative = self.rx_velocity_m_s() - self.tx_velocity_m_s();
        u.dot(&relative) / self.residual_slope_m_s()
    }

    /// Position jacobians conjugate under re-expression: components in,
    /// components out.
    fn re_expressed_jacobian(jacobian: Matrix3<f64>, dcm: Option<&DCM>) -> Matrix3<f64> {
        match dcm {
            None => jacobian,
            Some(dcm) => dcm.rot_mat * jacobian * dcm.rot_mat.transpose(),
        }
    }
}
