//! Optional YAML configuration.
//!
//! ```yaml
//! grpc:
//!   data_type_weights:
//!     vxlan: 30
//!     mpls: 0
//! ```
//!
//! Only the keys present override the built-in defaults.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unknown data type '{name}' in weights, expected one of: {known}")]
    UnknownDataType { name: String, known: String },

    #[error("Weight for data type '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: String, value: f64 },

    #[error("At least one data type weight must be greater than zero")]
    AllWeightsZero,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetsimConfig {
    #[serde(default)]
    pub grpc: GrpcConfig,
}

/// Settings for the gRPC telemetry generator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrpcConfig {
    /// Relative weight per data type name.
    #[serde(default)]
    pub data_type_weights: BTreeMap<String, f64>,
}

impl NetsimConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl GrpcConfig {
    /// Apply the configured overrides on top of `defaults`, keeping the
    /// defaults' order.
    pub fn resolve_weights(&self, defaults: &[(&'static str, f64)]) -> Result<Vec<f64>, ConfigError> {
        for (name, value) in &self.data_type_weights {
            if !defaults.iter().any(|(known, _)| known == name) {
                return Err(ConfigError::UnknownDataType {
                    name: name.clone(),
                    known: defaults
                        .iter()
                        .map(|(n, _)| *n)
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
            if !value.is_finite() || *value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name: name.clone(),
                    value: *value,
                });
            }
        }

        let weights: Vec<f64> = defaults
            .iter()
            .map(|(name, default)| {
                self.data_type_weights
                    .get(*name)
                    .copied()
                    .unwrap_or(*default)
            })
            .collect();

        if weights.iter().all(|w| *w == 0.0) {
            return Err(ConfigError::AllWeightsZero);
        }
        Ok(weights)
    }
}
