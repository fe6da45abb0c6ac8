pub mod frames;
pub mod models;
pub mod surfaces;
pub mod traits;

pub use frames::{FrameTransform, IdentityFrame};
pub use models::{FlatPlateModel, StallBlend, ThinAerofoilModel};
pub use surfaces::{evaluate_body, evaluate_surfaces, total_load, AeroSurface, BodyLoad};
pub use traits::AerodynamicModel;
