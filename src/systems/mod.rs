pub mod aerodynamics;

pub use aerodynamics::AirDataCalculation;
