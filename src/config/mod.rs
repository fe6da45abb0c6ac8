pub mod aerodynamics;
pub mod loader;

pub use aerodynamics::ThinAerofoilConfig;
pub use loader::{AerofoilConfig, ConfigError};
