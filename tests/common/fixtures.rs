use aerofoil::{AeroSurface, AerofoilConfig, AerofoilGeometry};
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

/// Aspect ratio 6, 12% thick, uncambered
pub fn create_reference_geometry() -> AerofoilGeometry {
    AerofoilGeometry::new(6.0, 0.12, 0.0, 1.5, 0.75)
}

pub fn create_cambered_geometry() -> AerofoilGeometry {
    AerofoilGeometry {
        camber_ratio: 0.04,
        ..create_reference_geometry()
    }
}

pub fn create_zero_aspect_ratio_geometry() -> AerofoilGeometry {
    AerofoilGeometry::new(0.0, 0.12, 0.0, 1.5, 0.75)
}

/// Wing halves, tailplane and fin of a light aircraft, body axes x right, y up, z forward
pub fn create_test_airframe() -> Vec<AeroSurface> {
    let wing = AerofoilGeometry::from_planform(4.5, 1.5, 0.18, 0.02);
    let tail = AerofoilGeometry::from_planform(1.8, 0.6, 0.054, 0.0);
    let fin = AerofoilGeometry::from_planform(1.2, 0.8, 0.072, 0.0);

    vec![
        AeroSurface::new("left_wing", wing).with_position(Vector3::new(-2.25, 0.0, 0.2)),
        AeroSurface::new("right_wing", wing).with_position(Vector3::new(2.25, 0.0, 0.2)),
        AeroSurface::new("tailplane", tail).with_position(Vector3::new(0.0, 0.1, -4.5)),
        AeroSurface::new("fin", fin)
            .with_position(Vector3::new(0.0, 0.7, -4.6))
            .with_orientation(UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2)),
    ]
}

pub fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("aerofoils")
        .join(name)
}

pub fn load_asset_config(name: &str) -> AerofoilConfig {
    AerofoilConfig::from_file(asset_path(name)).unwrap()
}
