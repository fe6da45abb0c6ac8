pub mod flat_plate;
pub mod thin_aerofoil;

pub use flat_plate::FlatPlateModel;
pub use thin_aerofoil::{StallBlend, ThinAerofoilModel};
