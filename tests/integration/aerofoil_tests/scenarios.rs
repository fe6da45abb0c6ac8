use aerofoil::{utils::deg_to_rad, AerodynamicModel, ThinAerofoilModel};
use approx::assert_relative_eq;
use std::f64::consts::PI;

use crate::common::{
    assert_coefficients_valid, assert_result_finite, create_cambered_geometry,
    create_reference_geometry, create_zero_aspect_ratio_geometry, evaluate_at,
};

#[test]
fn test_symmetric_aerofoil_at_zero_alpha() {
    let result = evaluate_at(&ThinAerofoilModel::default(), &create_reference_geometry(), 0.0);

    assert_result_finite(&result);
    assert_coefficients_valid(&result.coefficients);
    assert_relative_eq!(result.coefficients.cl, 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.coefficients.cm_0, 0.0, epsilon = 1e-12);
}

#[test]
fn test_five_degrees_is_pre_stall() {
    let model = ThinAerofoilModel::default();
    let result = evaluate_at(&model, &create_reference_geometry(), deg_to_rad(5.0));
    let c = result.coefficients;

    assert_result_finite(&result);
    assert_coefficients_valid(&c);
    assert!(c.cl > 0.0);
    assert_relative_eq!(c.blend, 1.0, epsilon = 1e-3);
    assert_relative_eq!(c.cd_induced, c.cl * c.cl / (PI * 6.0), epsilon = 1e-12);
}

#[test]
fn test_forty_five_degrees_is_post_stall() {
    let model = ThinAerofoilModel::default();
    let result = evaluate_at(&model, &create_reference_geometry(), deg_to_rad(45.0));
    let c = result.coefficients;

    assert_result_finite(&result);
    assert_relative_eq!(c.blend, 0.0, epsilon = 1e-6);
    assert_relative_eq!(c.cl, c.cl_post_stall, epsilon = 1e-6);
}

#[test]
fn test_zero_aspect_ratio_has_no_pre_stall_lift() {
    let model = ThinAerofoilModel::default();
    let geometry = create_zero_aspect_ratio_geometry();

    for alpha_deg in (-90..=90).step_by(15) {
        let c = evaluate_at(&model, &geometry, deg_to_rad(alpha_deg as f64)).coefficients;
        assert_eq!(c.k_ar, 0.0);
        assert_eq!(c.lift_curve_slope, 0.0);
        assert_eq!(c.cl_pre_stall, 0.0);
    }
}

#[test]
fn test_lift_peaks_near_stall_then_drops() {
    let model = ThinAerofoilModel::default();
    let geometry = create_reference_geometry();

    let cl = |deg: f64| evaluate_at(&model, &geometry, deg_to_rad(deg)).coefficients.cl;
    let stall = evaluate_at(&model, &geometry, 0.0).coefficients.stall_angle_deg;

    assert!(cl(stall - 4.0) > cl(5.0));
    assert!(cl(stall + 10.0) < cl(stall - 4.0));
    // Symmetric section: lift is odd in alpha
    assert_relative_eq!(cl(-12.0), -cl(12.0), epsilon = 1e-12);
}

#[test]
fn test_cambered_section_lifts_at_zero_alpha() {
    let model = ThinAerofoilModel::default();
    let result = evaluate_at(&model, &create_cambered_geometry(), 0.0);

    assert!(result.coefficients.cl > 0.0);
    assert_relative_eq!(result.coefficients.alpha_0, -0.04);
    assert!(result.resultant_force.y > 0.0);
}

#[test]
fn test_model_name() {
    assert_eq!(ThinAerofoilModel::default().name(), "Thin Aerofoil");
}
