use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Instantaneous aerodynamic state of a surface, refreshed every evaluation.
///
/// Vectors are expressed in the aerofoil's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroState {
    /// Angle of attack (α) in radians.
    pub angle_of_attack: f64,
    /// cos(α), carried alongside α so callers can supply a cached value.
    pub cos_angle_of_attack: f64,
    /// Dynamic pressure ½ρV² (Pa).
    pub dynamic_pressure: f64,
    /// Reference area for lift and moment (m²).
    pub planform_area: f64,
    /// Reference area for induced drag (m²).
    pub profile_area: f64,
    /// Unit direction of the relative wind.
    pub wind_direction: Vector3<f64>,
    /// Axis about which α is measured; `wind_direction × axis` is the lift direction.
    pub angle_of_attack_rotation_axis: Vector3<f64>,
}

impl AeroState {
    /// Creates a new state, deriving `cos_angle_of_attack` from `angle_of_attack`.
    pub fn new(
        angle_of_attack: f64,
        dynamic_pressure: f64,
        planform_area: f64,
        profile_area: f64,
        wind_direction: Vector3<f64>,
        angle_of_attack_rotation_axis: Vector3<f64>,
    ) -> Self {
        Self {
            angle_of_attack,
            cos_angle_of_attack: angle_of_attack.cos(),
            dynamic_pressure,
            planform_area,
            profile_area,
            wind_direction,
            angle_of_attack_rotation_axis,
        }
    }
}

impl Default for AeroState {
    /// Quiescent air with unit reference areas.
    fn default() -> Self {
        Self {
            angle_of_attack: 0.0,
            cos_angle_of_attack: 1.0,
            dynamic_pressure: 0.0,
            planform_area: 1.0,
            profile_area: 1.0,
            wind_direction: Vector3::zeros(),
            angle_of_attack_rotation_axis: -Vector3::x(),
        }
    }
}
