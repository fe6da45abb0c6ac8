use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::components::AerofoilGeometry;
use crate::config::ThinAerofoilConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aerofoil configuration: {0}")]
    ValidationError(String),
}

/// A named surface description as authored in YAML.
///
/// ```yaml
/// name: main_wing
/// geometry:
///   aspect_ratio: 6.0
///   thickness_to_chord_ratio: 0.12
///   camber_ratio: 0.0
///   chord: 1.5
///   mid_axis: 0.75
/// model:
///   stall_sharpness: 0.5
/// ```
///
/// Omitted `model` fields fall back to the compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AerofoilConfig {
    pub name: String,
    pub geometry: AerofoilGeometry,
    #[serde(default)]
    pub model: ThinAerofoilConfig,
}

impl AerofoilConfig {
    pub fn new(name: impl Into<String>, geometry: AerofoilGeometry) -> Self {
        Self {
            name: name.into(),
            geometry,
            model: ThinAerofoilConfig::default(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AerofoilConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        log::debug!("Loaded aerofoil config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }

        self.geometry
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("{}: {}", self.name, e)))?;
        self.model
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("{}: {}", self.name, e)))?;

        if self.geometry.is_non_lifting() {
            log::warn!(
                "Aerofoil '{}' has zero aspect ratio; it is non-lifting and its induced drag is undefined",
                self.name
            );
        }

        Ok(())
    }
}
