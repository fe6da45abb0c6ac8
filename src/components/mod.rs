pub mod aerodynamics;
pub mod air_data;
pub mod geometry;

pub use aerodynamics::{AerofoilCoefficients, AerofoilResult};
pub use air_data::AeroState;
pub use geometry::AerofoilGeometry;
