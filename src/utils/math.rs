use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Decreasing logistic curve `1 / (1 + e^x)`.
///
/// Saturates to exactly 0.0 or 1.0 for large `|x|` rather than producing NaN.
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + x.exp())
}

/// Dynamic pressure `½ρV²` (Pa)
#[inline]
pub fn dynamic_pressure(density: f64, airspeed: f64) -> f64 {
    0.5 * density * airspeed * airspeed
}
