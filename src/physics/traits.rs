use crate::components::{AeroState, AerofoilGeometry, AerofoilResult};
use crate::physics::frames::FrameTransform;

/// A quasi-steady coefficient model for a single lifting surface.
///
/// Implementations hold only their tuning constants; an evaluation depends on
/// nothing but its arguments, so one model can serve any number of surfaces
/// from any number of threads.
pub trait AerodynamicModel: Send + Sync {
    fn name(&self) -> &str;

    /// Computes the loads on `geometry` for the instantaneous `state`.
    ///
    /// The force is expressed in the frame of `state`'s wind vectors; the
    /// moment is mapped through `frame` into body axes. Never fails: callers
    /// check [`AerofoilResult::ensure_finite`] before applying the loads.
    fn evaluate(
        &self,
        geometry: &AerofoilGeometry,
        state: &AeroState,
        frame: &dyn FrameTransform,
    ) -> AerofoilResult;
}
