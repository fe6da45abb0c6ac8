use aerofoil::{
    AeroState, AerofoilGeometry, AerofoilResult, AerodynamicModel, IdentityFrame, ThinAerofoilConfig,
};
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

pub const TEST_SEED: u64 = 0x5EED_A1F0;

/// Creates a state with the chord along +z and the wind at `alpha` in the y-z plane
pub fn create_test_state(alpha: f64, dynamic_pressure: f64) -> AeroState {
    let wind = Vector3::new(0.0, alpha.sin(), -alpha.cos());
    AeroState::new(alpha, dynamic_pressure, 13.5, 2.0, wind, -Vector3::x())
}

pub fn evaluate_at(
    model: &dyn AerodynamicModel,
    geometry: &AerofoilGeometry,
    alpha: f64,
) -> AerofoilResult {
    model.evaluate(geometry, &create_test_state(alpha, 1000.0), &IdentityFrame)
}

pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(TEST_SEED)
}

/// A random lifting geometry within authoring bounds
pub fn random_geometry(rng: &mut impl Rng) -> AerofoilGeometry {
    let chord = rng.gen_range(0.2..3.0);
    AerofoilGeometry::new(
        rng.gen_range(0.1..20.0),
        rng.gen_range(0.0..0.3),
        rng.gen_range(-0.1..0.1),
        chord,
        0.5 * chord,
    )
}

pub fn random_alpha(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-PI..PI)
}

/// Random model constants that pass `ThinAerofoilConfig::validate`
pub fn random_model_config(rng: &mut impl Rng) -> ThinAerofoilConfig {
    let stall_angle_min_deg = rng.gen_range(0.0..30.0);
    ThinAerofoilConfig {
        thickness_decay: rng.gen_range(0.0..10.0),
        stall_angle_min_deg,
        stall_angle_max_deg: stall_angle_min_deg + rng.gen_range(0.0..30.0),
        stall_sharpness: rng.gen_range(0.05..3.0),
        cz_max: rng.gen_range(0.0..2.0),
    }
}
