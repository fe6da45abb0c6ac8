use serde::{Deserialize, Serialize};

use crate::utils::{
    AeroError, DEFAULT_CZ_MAX, DEFAULT_STALL_ANGLE_MAX_DEG, DEFAULT_STALL_ANGLE_MIN_DEG,
    DEFAULT_STALL_SHARPNESS, DEFAULT_THICKNESS_DECAY,
};

/// Empirical constants of the thin aerofoil model, overridable per aerofoil class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinAerofoilConfig {
    /// Exponent constant of the thickness correction `exp(-λ (t/c)²)`.
    pub thickness_decay: f64,
    /// Stall angle approached at high aspect ratio (degrees).
    pub stall_angle_min_deg: f64,
    /// Stall angle at zero aspect ratio (degrees).
    pub stall_angle_max_deg: f64,
    /// Gain of the stall sigmoids (per degree).
    pub stall_sharpness: f64,
    /// Maximum cross-flow normal force coefficient.
    pub cz_max: f64,
}

impl Default for ThinAerofoilConfig {
    fn default() -> Self {
        Self {
            thickness_decay: DEFAULT_THICKNESS_DECAY,
            stall_angle_min_deg: DEFAULT_STALL_ANGLE_MIN_DEG,
            stall_angle_max_deg: DEFAULT_STALL_ANGLE_MAX_DEG,
            stall_sharpness: DEFAULT_STALL_SHARPNESS,
            cz_max: DEFAULT_CZ_MAX,
        }
    }
}

impl ThinAerofoilConfig {
    pub fn validate(&self) -> Result<(), AeroError> {
        let fields = [
            ("thickness_decay", self.thickness_decay),
            ("stall_angle_min_deg", self.stall_angle_min_deg),
            ("stall_angle_max_deg", self.stall_angle_max_deg),
            ("stall_sharpness", self.stall_sharpness),
            ("cz_max", self.cz_max),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AeroError::InvalidConfig(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        // A negative window swaps the stall sigmoids and drives the blend below zero
        if self.stall_angle_min_deg < 0.0 {
            return Err(AeroError::InvalidConfig(format!(
                "stall_angle_min_deg must be non-negative, got {}",
                self.stall_angle_min_deg
            )));
        }
        if self.stall_angle_min_deg > self.stall_angle_max_deg {
            return Err(AeroError::InvalidConfig(format!(
                "stall_angle_min_deg ({}) exceeds stall_angle_max_deg ({})",
                self.stall_angle_min_deg, self.stall_angle_max_deg
            )));
        }
        if self.stall_sharpness <= 0.0 {
            return Err(AeroError::InvalidConfig(format!(
                "stall_sharpness must be positive, got {}",
                self.stall_sharpness
            )));
        }
        if self.thickness_decay < 0.0 {
            return Err(AeroError::InvalidConfig(format!(
                "thickness_decay must be non-negative, got {}",
                self.thickness_decay
            )));
        }
        if self.cz_max < 0.0 {
            return Err(AeroError::InvalidConfig(format!(
                "cz_max must be non-negative, got {}",
                self.cz_max
            )));
        }

        Ok(())
    }
}
