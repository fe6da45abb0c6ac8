use nalgebra::{UnitQuaternion, Vector3};

use crate::components::AeroState;
use crate::utils::{dynamic_pressure, MIN_AIRSPEED_THRESHOLD};

/// Air data for one surface, derived from the relative wind in its local axes.
///
/// Local axes: x spanwise (the pitch axis), y normal to the chord, z along the
/// chord towards the leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDataCalculation {
    pub airspeed: f64,
    pub angle_of_attack: f64,
    pub dynamic_pressure: f64,
    pub wind_direction: Vector3<f64>,
    pub angle_of_attack_rotation_axis: Vector3<f64>,
}

impl AirDataCalculation {
    /// `relative_wind` is the velocity of the air relative to the surface,
    /// in local axes (m/s).
    pub fn from_relative_wind(relative_wind: &Vector3<f64>, density: f64) -> Self {
        let airspeed = relative_wind.norm();
        if airspeed <= MIN_AIRSPEED_THRESHOLD {
            log::debug!("Airspeed {:.3e} m/s below threshold, surface is unloaded", airspeed);
            return Self {
                airspeed,
                angle_of_attack: 0.0,
                dynamic_pressure: 0.0,
                wind_direction: Vector3::zeros(),
                angle_of_attack_rotation_axis: -Vector3::x(),
            };
        }

        let wind_direction = relative_wind / airspeed;

        Self {
            airspeed,
            angle_of_attack: Self::calculate_alpha(&wind_direction),
            dynamic_pressure: dynamic_pressure(density, airspeed),
            wind_direction,
            angle_of_attack_rotation_axis: Self::calculate_rotation_axis(&wind_direction),
        }
    }

    /// Builds air data from the motion of the surface and the ambient wind.
    ///
    /// # Arguments
    /// * `velocity` - Surface velocity, world axes (m/s).
    /// * `wind` - Ambient wind velocity, world axes (m/s).
    /// * `attitude` - Rotation from local to world axes.
    /// * `density` - Air density (kg/m³).
    pub fn from_motion(
        velocity: &Vector3<f64>,
        wind: &Vector3<f64>,
        attitude: &UnitQuaternion<f64>,
        density: f64,
    ) -> Self {
        let relative_wind = attitude.inverse_transform_vector(&(wind - velocity));
        Self::from_relative_wind(&relative_wind, density)
    }

    // Measured in the chord-normal plane; air arriving from below is positive.
    fn calculate_alpha(wind_direction: &Vector3<f64>) -> f64 {
        wind_direction.y.atan2(-wind_direction.z)
    }

    // Span axis made perpendicular to the wind, reversed so that
    // `wind × axis` points to +y at positive alpha.
    fn calculate_rotation_axis(wind_direction: &Vector3<f64>) -> Vector3<f64> {
        let span = Vector3::x();
        let perpendicular = span - wind_direction * wind_direction.dot(&span);
        match perpendicular.try_normalize(MIN_AIRSPEED_THRESHOLD) {
            Some(axis) => -axis,
            None => -span,
        }
    }

    pub fn to_aero_state(&self, planform_area: f64, profile_area: f64) -> AeroState {
        AeroState::new(
            self.angle_of_attack,
            self.dynamic_pressure,
            planform_area,
            profile_area,
            self.wind_direction,
            self.angle_of_attack_rotation_axis,
        )
    }
}
