use nalgebra::{UnitQuaternion, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AeroState, AerofoilGeometry, AerofoilResult};
use crate::physics::traits::AerodynamicModel;
use crate::utils::AeroError;

/// A lifting surface mounted on a rigid body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroSurface {
    pub name: String,
    pub geometry: AerofoilGeometry,
    /// Load application point relative to the body reference point, body axes (m).
    pub position: Vector3<f64>,
    /// Rotation from the surface's local axes to body axes.
    pub orientation: UnitQuaternion<f64>,
}

impl AeroSurface {
    pub fn new(name: impl Into<String>, geometry: AerofoilGeometry) -> Self {
        Self {
            name: name.into(),
            geometry,
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, orientation: UnitQuaternion<f64>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Evaluates this surface with its own orientation as the local-to-body frame.
    pub fn evaluate(&self, model: &dyn AerodynamicModel, state: &AeroState) -> AerofoilResult {
        model.evaluate(&self.geometry, state, &self.orientation)
    }
}

/// Net force and moment on a body about its reference point, body axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyLoad {
    /// Net force (N).
    pub force: Vector3<f64>,
    /// Net moment (N·m).
    pub moment: Vector3<f64>,
}

/// Evaluates every surface against its state in parallel.
///
/// `states[i]` belongs to `surfaces[i]`, with wind vectors in that surface's
/// local axes.
pub fn evaluate_surfaces(
    model: &dyn AerodynamicModel,
    surfaces: &[AeroSurface],
    states: &[AeroState],
) -> Result<Vec<AerofoilResult>, AeroError> {
    if surfaces.len() != states.len() {
        return Err(AeroError::InvalidConfig(format!(
            "{} surfaces but {} aero states",
            surfaces.len(),
            states.len()
        )));
    }

    Ok(surfaces
        .par_iter()
        .zip(states.par_iter())
        .map(|(surface, state)| surface.evaluate(model, state))
        .collect())
}

/// Sums surface results into a single body load.
///
/// Each force is rotated into body axes and contributes `position × force`
/// to the moment. Any non-finite surface result aborts the sum.
pub fn total_load(
    surfaces: &[AeroSurface],
    results: &[AerofoilResult],
) -> Result<BodyLoad, AeroError> {
    if surfaces.len() != results.len() {
        return Err(AeroError::InvalidConfig(format!(
            "{} surfaces but {} results",
            surfaces.len(),
            results.len()
        )));
    }

    let mut load = BodyLoad::default();
    for (surface, result) in surfaces.iter().zip(results) {
        if let Err(e) = result.ensure_finite() {
            log::warn!("Dropping body load: surface '{}' is non-finite", surface.name);
            return Err(AeroError::NonFiniteResult(format!(
                "surface '{}': {}",
                surface.name, e
            )));
        }

        let force = surface.orientation * result.resultant_force;
        load.force += force;
        load.moment += result.resultant_moment + surface.position.cross(&force);
    }

    Ok(load)
}

/// Evaluates all surfaces and returns their combined load on the body.
pub fn evaluate_body(
    model: &dyn AerodynamicModel,
    surfaces: &[AeroSurface],
    states: &[AeroState],
) -> Result<BodyLoad, AeroError> {
    let results = evaluate_surfaces(model, surfaces, states)?;
    log::debug!("Evaluated {} surfaces with {}", results.len(), model.name());
    total_load(surfaces, &results)
}
