use crate::components::{AeroState, AerofoilCoefficients, AerofoilGeometry, AerofoilResult};
use crate::config::ThinAerofoilConfig;
use crate::physics::frames::FrameTransform;
use crate::physics::models::thin_aerofoil::{
    aspect_ratio_correction, assemble_loads, complete_coefficients, cross_flow_lift,
    thickness_correction,
};
use crate::physics::traits::AerodynamicModel;

/// Cross-flow lift only, as if the surface were permanently stalled.
///
/// Suits bluff or very low aspect ratio bodies. Shares the thickness
/// correction, induced drag and moving centre of pressure with
/// [`ThinAerofoilModel`](super::ThinAerofoilModel); the stall angle, sharpness
/// and camber moment play no part.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatPlateModel {
    pub config: ThinAerofoilConfig,
}

impl FlatPlateModel {
    pub fn new(config: ThinAerofoilConfig) -> Self {
        Self { config }
    }

    pub fn coefficients(
        &self,
        geometry: &AerofoilGeometry,
        state: &AeroState,
    ) -> AerofoilCoefficients {
        let k_t = thickness_correction(
            geometry.thickness_to_chord_ratio,
            self.config.thickness_decay,
        );
        let alpha_0 = -geometry.camber_ratio;
        let cl_post_stall =
            cross_flow_lift(state.angle_of_attack, alpha_0, k_t, self.config.cz_max);

        complete_coefficients(
            AerofoilCoefficients {
                k_ar: aspect_ratio_correction(geometry.aspect_ratio),
                k_t,
                alpha_0,
                cl_post_stall,
                blend: 0.0,
                cl: cl_post_stall,
                ..Default::default()
            },
            geometry,
            state.cos_angle_of_attack,
        )
    }
}

impl AerodynamicModel for FlatPlateModel {
    fn name(&self) -> &str {
        "Flat Plate"
    }

    fn evaluate(
        &self,
        geometry: &AerofoilGeometry,
        state: &AeroState,
        frame: &dyn FrameTransform,
    ) -> AerofoilResult {
        assemble_loads(self.coefficients(geometry, state), geometry, state, frame)
    }
}
