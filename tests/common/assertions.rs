use aerofoil::{AerofoilCoefficients, AerofoilResult};
use approx::assert_relative_eq;
use nalgebra::Vector3;

/// Assert that both load vectors of a result are finite
#[track_caller]
pub fn assert_result_finite(result: &AerofoilResult) {
    assert!(
        result.resultant_force.iter().all(|x| x.is_finite()),
        "Resultant force is not finite: {:?}",
        result.resultant_force
    );
    assert!(
        result.resultant_moment.iter().all(|x| x.is_finite()),
        "Resultant moment is not finite: {:?}",
        result.resultant_moment
    );
}

/// Assert the invariants every coefficient set must satisfy on a lifting surface
#[track_caller]
pub fn assert_coefficients_valid(c: &AerofoilCoefficients) {
    assert!(
        (0.0..=1.0).contains(&c.blend),
        "Blend {} outside [0, 1]",
        c.blend
    );
    assert!(c.cd_induced >= 0.0, "Negative induced drag {}", c.cd_induced);
    assert!((0.0..=1.0).contains(&c.k_ar), "k_AR {} outside [0, 1]", c.k_ar);
    assert!(c.k_t > 0.0 && c.k_t <= 1.0, "k_t {} outside (0, 1]", c.k_t);
    assert_relative_eq!(c.blend, c.lower_sigmoid - c.upper_sigmoid);
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(
        actual.x,
        expected.x,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.y,
        expected.y,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.z,
        expected.z,
        epsilon = epsilon,
        max_relative = epsilon
    );
}
