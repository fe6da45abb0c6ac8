use nalgebra::{Isometry3, Rotation3, UnitQuaternion, Vector3};

/// Maps vectors from an aerofoil's local axes into the axes of the rigid body
/// carrying it.
pub trait FrameTransform: Send + Sync {
    fn local_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64>;
}

/// Local axes coincide with body axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityFrame;

impl FrameTransform for IdentityFrame {
    fn local_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        *vector
    }
}

impl FrameTransform for UnitQuaternion<f64> {
    fn local_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.transform_vector(vector)
    }
}

impl FrameTransform for Rotation3<f64> {
    fn local_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.transform_vector(vector)
    }
}

// Free vectors ignore the translation part.
impl FrameTransform for Isometry3<f64> {
    fn local_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.transform_vector(vector)
    }
}
