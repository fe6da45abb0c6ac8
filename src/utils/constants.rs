pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6; // m/s

// Empirical thin aerofoil constants
pub const DEFAULT_THICKNESS_DECAY: f64 = 6.0; // viscous decay with t/c
pub const DEFAULT_STALL_ANGLE_MIN_DEG: f64 = 15.0; // high aspect ratio stall (degrees)
pub const DEFAULT_STALL_ANGLE_MAX_DEG: f64 = 35.0; // zero aspect ratio stall (degrees)
pub const DEFAULT_STALL_SHARPNESS: f64 = 0.75; // sigmoid gain per degree
pub const DEFAULT_CZ_MAX: f64 = 1.2; // max cross-flow normal force coefficient
