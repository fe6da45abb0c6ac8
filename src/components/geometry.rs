use serde::{Deserialize, Serialize};

use crate::utils::AeroError;

/// Geometric description of a single thin lifting surface.
///
/// Treated as immutable input by the models: it is set once per surface and
/// shared read-only between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerofoilGeometry {
    /// Span²/planform area (dimensionless, ≥ 0).
    pub aspect_ratio: f64,
    /// Maximum thickness over chord (dimensionless, nominally in [0, 1]).
    pub thickness_to_chord_ratio: f64,
    /// Camber ratio. Positive camber gives a negative zero-lift angle.
    pub camber_ratio: f64,
    /// Chord length (m).
    pub chord: f64,
    /// Half-chord reference length used for the centre of pressure arm (m).
    pub mid_axis: f64,
}

impl AerofoilGeometry {
    /// Creates a new `AerofoilGeometry` from precomputed parameters.
    ///
    /// # Arguments
    /// * `aspect_ratio` - Span²/area (dimensionless).
    /// * `thickness_to_chord_ratio` - t/c (dimensionless).
    /// * `camber_ratio` - Camber ratio (dimensionless).
    /// * `chord` - Chord length (m).
    /// * `mid_axis` - Half-chord reference length (m).
    pub fn new(
        aspect_ratio: f64,
        thickness_to_chord_ratio: f64,
        camber_ratio: f64,
        chord: f64,
        mid_axis: f64,
    ) -> Self {
        Self {
            aspect_ratio,
            thickness_to_chord_ratio,
            camber_ratio,
            chord,
            mid_axis,
        }
    }

    /// Builds the geometry of a rectangular planform from its dimensions (m).
    pub fn from_planform(span: f64, chord: f64, thickness: f64, camber_ratio: f64) -> Self {
        Self::new(span / chord, thickness / chord, camber_ratio, chord, 0.5 * chord)
    }

    /// Symmetric NACA 0012 section on an aspect ratio 6 rectangular wing.
    pub fn naca0012_wing() -> Self {
        Self::new(6.0, 0.12, 0.0, 1.5, 0.75)
    }

    /// Planform area implied by the chord and aspect ratio (m²).
    pub fn planform_area(&self) -> f64 {
        self.aspect_ratio * self.chord * self.chord
    }

    /// Checks the geometry is physically meaningful.
    ///
    /// The models never call this; it is for validating surfaces when they
    /// are authored or loaded.
    pub fn validate(&self) -> Result<(), AeroError> {
        let fields = [
            ("aspect_ratio", self.aspect_ratio),
            ("thickness_to_chord_ratio", self.thickness_to_chord_ratio),
            ("camber_ratio", self.camber_ratio),
            ("chord", self.chord),
            ("mid_axis", self.mid_axis),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AeroError::InvalidGeometry(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.aspect_ratio < 0.0 {
            return Err(AeroError::InvalidGeometry(format!(
                "aspect_ratio must be non-negative, got {}",
                self.aspect_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.thickness_to_chord_ratio) {
            return Err(AeroError::InvalidGeometry(format!(
                "thickness_to_chord_ratio must be in [0, 1], got {}",
                self.thickness_to_chord_ratio
            )));
        }
        if self.chord <= 0.0 {
            return Err(AeroError::InvalidGeometry(format!(
                "chord must be positive, got {}",
                self.chord
            )));
        }
        if self.mid_axis <= 0.0 {
            return Err(AeroError::InvalidGeometry(format!(
                "mid_axis must be positive, got {}",
                self.mid_axis
            )));
        }

        Ok(())
    }

    /// A zero aspect ratio surface produces no lift-curve slope.
    pub fn is_non_lifting(&self) -> bool {
        self.aspect_ratio == 0.0
    }
}
