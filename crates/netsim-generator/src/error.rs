//! Error type for generator operations.

use netsim_core::{ConfigError, SchemaError, TimeWindowError};

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Record batch did not match its table schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Time window error: {0}")]
    TimeWindow(#[from] TimeWindowError),

    #[error("Invalid selection weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("No devices to sample from")]
    NoDevices,

    #[error("Fault ratio must be within [0, 1], got {0}")]
    InvalidFaultRatio(f64),

    #[error("Record count {0} does not fit in memory on this platform")]
    CountTooLarge(u64),
}
