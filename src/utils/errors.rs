use thiserror::Error;

#[derive(Error, Debug)]
pub enum AeroError {
    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Geometry error: {0}")]
    InvalidGeometry(String),

    #[error("Non-finite result: {0}")]
    NonFiniteResult(String),
}
