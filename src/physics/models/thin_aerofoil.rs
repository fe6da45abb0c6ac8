//! Thin aerofoil lift, induced drag and pitching moment.
//!
//! Lifting-line theory below stall and flat-plate cross-flow lift above it are
//! blended with a pair of logistic sigmoids, so the force stays continuous
//! through the stall boundary. The centre of pressure moves with angle of
//! attack, which together with camber gives the pitching moment.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::components::{AeroState, AerofoilCoefficients, AerofoilGeometry, AerofoilResult};
use crate::config::ThinAerofoilConfig;
use crate::physics::frames::FrameTransform;
use crate::physics::traits::AerodynamicModel;
use crate::utils::{logistic, rad_to_deg};

/// Finite wing correction to the 2D lift-curve slope.
///
/// Exactly zero for a zero aspect ratio, otherwise `AR / (2 + AR)` clamped so
/// the slope can never exceed the thin aerofoil limit of 2π.
pub fn aspect_ratio_correction(aspect_ratio: f64) -> f64 {
    if aspect_ratio == 0.0 {
        0.0
    } else {
        (aspect_ratio / (2.0 + aspect_ratio)).clamp(0.0, 1.0)
    }
}

/// Empirical viscous correction `exp(-λ (t/c)²)`.
pub fn thickness_correction(thickness_to_chord_ratio: f64, thickness_decay: f64) -> f64 {
    (-thickness_decay * thickness_to_chord_ratio * thickness_to_chord_ratio).exp()
}

/// Stall angle in degrees. Low aspect ratio surfaces stall later.
pub fn stall_angle_deg(aspect_ratio: f64, config: &ThinAerofoilConfig) -> f64 {
    config.stall_angle_min_deg
        + (config.stall_angle_max_deg - config.stall_angle_min_deg) * (-aspect_ratio / 2.0).exp()
}

/// Sigmoid pair bounding the pre-stall window `[-stall, +stall]` around α₀.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallBlend {
    pub upper_sigmoid: f64,
    pub lower_sigmoid: f64,
    /// `lower - upper`: ≈ 1 inside the window, → 0 outside.
    pub blend: f64,
}

pub fn stall_blend(
    angle_of_attack: f64,
    alpha_0: f64,
    stall_angle_deg: f64,
    stall_sharpness: f64,
) -> StallBlend {
    let offset_deg = rad_to_deg(alpha_0 - angle_of_attack);
    let upper_sigmoid = logistic((stall_angle_deg - offset_deg) * stall_sharpness);
    let lower_sigmoid = logistic((-stall_angle_deg - offset_deg) * stall_sharpness);

    StallBlend {
        upper_sigmoid,
        lower_sigmoid,
        blend: lower_sigmoid - upper_sigmoid,
    }
}

/// Post-stall flat-plate cross-flow lift.
pub(crate) fn cross_flow_lift(
    angle_of_attack: f64,
    alpha_0: f64,
    k_t: f64,
    cz_max: f64,
) -> f64 {
    0.5 * cz_max * k_t * (2.0 * (angle_of_attack - alpha_0)).sin()
}

/// `CL² / (π AR)`. Undefined (NaN or ∞) for a zero aspect ratio.
pub(crate) fn induced_drag_coefficient(cl: f64, aspect_ratio: f64) -> f64 {
    cl * cl / (PI * aspect_ratio)
}

/// Fills in the lift-dependent moment terms and induced drag once `cl`,
/// `blend`, `lift_curve_slope` and `alpha_0` are known.
pub(crate) fn complete_coefficients(
    mut c: AerofoilCoefficients,
    geometry: &AerofoilGeometry,
    cos_alpha: f64,
) -> AerofoilCoefficients {
    c.cd_induced = induced_drag_coefficient(c.cl, geometry.aspect_ratio);

    c.cm_0 = 0.25 * -c.lift_curve_slope * c.alpha_0 * c.blend;

    // c/8 (cos 2α + 1) rewritten as 2cos²α, with mid_axis being half the chord
    c.cop_z = 0.5 * geometry.mid_axis * cos_alpha * cos_alpha;
    c.cm_delta = c.cl * c.cop_z * cos_alpha / geometry.mid_axis;
    c.cm = c.cm_0 + c.cm_delta;

    c
}

/// Converts coefficients into loads.
///
/// The moment acts purely about the local spanwise axis and is negated
/// relative to `cm` to match the body's moment convention.
pub(crate) fn assemble_loads(
    coefficients: AerofoilCoefficients,
    geometry: &AerofoilGeometry,
    state: &AeroState,
    frame: &dyn FrameTransform,
) -> AerofoilResult {
    let q_s = state.dynamic_pressure * state.planform_area;

    let lift_direction = state
        .wind_direction
        .cross(&state.angle_of_attack_rotation_axis);
    let lift = lift_direction * (q_s * coefficients.cl);
    let induced_drag = state.wind_direction
        * (-coefficients.cd_induced * state.dynamic_pressure * state.profile_area);

    let moment_local = Vector3::new(-coefficients.cm * q_s * geometry.chord, 0.0, 0.0);

    AerofoilResult {
        resultant_force: lift + induced_drag,
        resultant_moment: frame.local_to_body(&moment_local),
        coefficients,
    }
}

/// Computes the full coefficient set for one instant.
pub fn coefficients(
    geometry: &AerofoilGeometry,
    state: &AeroState,
    config: &ThinAerofoilConfig,
) -> AerofoilCoefficients {
    let alpha = state.angle_of_attack;

    let k_ar = aspect_ratio_correction(geometry.aspect_ratio);
    let k_t = thickness_correction(geometry.thickness_to_chord_ratio, config.thickness_decay);
    let stall_angle_deg = stall_angle_deg(geometry.aspect_ratio, config);

    let lift_curve_slope = 2.0 * PI * k_ar * k_t;
    let alpha_0 = -geometry.camber_ratio;

    let cl_pre_stall = lift_curve_slope * (alpha - alpha_0);
    let cl_post_stall = cross_flow_lift(alpha, alpha_0, k_t, config.cz_max);

    let StallBlend {
        upper_sigmoid,
        lower_sigmoid,
        blend,
    } = stall_blend(alpha, alpha_0, stall_angle_deg, config.stall_sharpness);

    let cl = blend * cl_pre_stall + (1.0 - blend) * cl_post_stall;

    complete_coefficients(
        AerofoilCoefficients {
            k_ar,
            k_t,
            stall_angle_deg,
            lift_curve_slope,
            alpha_0,
            cl_pre_stall,
            cl_post_stall,
            upper_sigmoid,
            lower_sigmoid,
            blend,
            cl,
            ..Default::default()
        },
        geometry,
        state.cos_angle_of_attack,
    )
}

/// Thin aerofoil model with a sigmoid stall transition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThinAerofoilModel {
    pub config: ThinAerofoilConfig,
}

impl ThinAerofoilModel {
    pub fn new(config: ThinAerofoilConfig) -> Self {
        Self { config }
    }
}

impl AerodynamicModel for ThinAerofoilModel {
    fn name(&self) -> &str {
        "Thin Aerofoil"
    }

    fn evaluate(
        &self,
        geometry: &AerofoilGeometry,
        state: &AeroState,
        frame: &dyn FrameTransform,
    ) -> AerofoilResult {
        let coefficients = coefficients(geometry, state, &self.config);
        assemble_loads(coefficients, geometry, state, frame)
    }
}
