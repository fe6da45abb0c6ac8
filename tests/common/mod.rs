mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_coefficients_valid, assert_result_finite, assert_vector_eq};

pub use helpers::*;

pub use fixtures::*;
