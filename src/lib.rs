//! Quasi-steady thin aerofoil aerodynamics for rigid-body flight simulation.
//!
//! A surface is described once by its [`AerofoilGeometry`]; every simulation
//! tick the caller supplies an [`AeroState`] and an [`AerodynamicModel`]
//! returns the force and moment on the surface as an [`AerofoilResult`].

pub mod components;
pub mod config;
pub mod physics;
pub mod systems;
pub mod utils;

pub use components::{AeroState, AerofoilCoefficients, AerofoilGeometry, AerofoilResult};
pub use config::{AerofoilConfig, ConfigError, ThinAerofoilConfig};
pub use physics::{
    evaluate_body, evaluate_surfaces, total_load, AeroSurface, AerodynamicModel, BodyLoad,
    FlatPlateModel, FrameTransform, IdentityFrame, ThinAerofoilModel,
};
pub use systems::AirDataCalculation;
pub use utils::AeroError;
