use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::AeroError;

/// Every intermediate value of one coefficient evaluation, kept for telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AerofoilCoefficients {
    /// Finite wing correction to the 2D lift-curve slope.
    pub k_ar: f64,
    /// Viscous thickness correction.
    pub k_t: f64,
    /// Stall angle (degrees).
    pub stall_angle_deg: f64,
    /// dCL/dα in the linear regime (per radian).
    pub lift_curve_slope: f64,
    /// Zero-lift angle (rad).
    pub alpha_0: f64,
    pub cl_pre_stall: f64,
    pub cl_post_stall: f64,
    pub upper_sigmoid: f64,
    pub lower_sigmoid: f64,
    /// Weight of the pre-stall lift model, in [0, 1].
    pub blend: f64,
    pub cl: f64,
    pub cd_induced: f64,
    /// Camber moment, active pre-stall only.
    pub cm_0: f64,
    /// Centre of pressure offset from mid-chord (m).
    pub cop_z: f64,
    pub cm_delta: f64,
    pub cm: f64,
}

/// Loads produced by a single evaluation, in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerofoilResult {
    /// Resultant force (N).
    pub resultant_force: Vector3<f64>,
    /// Resultant moment (N·m).
    pub resultant_moment: Vector3<f64>,
    pub coefficients: AerofoilCoefficients,
}

impl AerofoilResult {
    /// A result carrying no load at all.
    pub fn zero() -> Self {
        Self {
            resultant_force: Vector3::zeros(),
            resultant_moment: Vector3::zeros(),
            coefficients: AerofoilCoefficients::default(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.resultant_force.iter().all(|x| x.is_finite())
            && self.resultant_moment.iter().all(|x| x.is_finite())
    }

    /// Returns the result if both load vectors are finite.
    ///
    /// Models never reject their own output, so NaN/Inf (e.g. lift on a zero
    /// aspect ratio surface) has to be caught here before loads reach the
    /// integrator.
    pub fn ensure_finite(&self) -> Result<&Self, AeroError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(AeroError::NonFiniteResult(format!(
                "force {:?}, moment {:?} (CL = {}, CD_induced = {})",
                self.resultant_force.as_slice(),
                self.resultant_moment.as_slice(),
                self.coefficients.cl,
                self.coefficients.cd_induced
            )))
        }
    }
}

impl Default for AerofoilResult {
    fn default() -> Self {
        Self::zero()
    }
}
