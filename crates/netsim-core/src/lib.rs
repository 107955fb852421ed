//! Core types for the netsim telemetry generators.
//!
//! This crate holds everything the generators share:
//!
//! - [`vocab`] - fixed vocabularies (vendors, speeds, locations, protocols)
//! - [`Vendor`] and [`Environment`] presets
//! - [`ModuleId`] - the composite optical module key
//! - [`TimeWindow`] - the sampling window
//! - [`TelemetryRecord`] / [`NormalizedTable`] - typed records and the
//!   normalization step that runs before every write
//! - [`NetsimConfig`] - optional YAML overrides
//!
//! # Architecture
//!
//! ```text
//! netsim-core (this crate)
//!    │
//!    ├─── netsim-generator  (entity generators, vendor formatters, samplers)
//!    ├─── netsim-parquet    (columnar writer over NormalizedTable)
//!    └─── netsim            (CLI)
//! ```

pub mod config;
pub mod correlate;
pub mod environment;
pub mod module_id;
pub mod random;
pub mod table;
pub mod time;
pub mod vendor;
pub mod vocab;

pub use config::{ConfigError, GrpcConfig, NetsimConfig};
pub use environment::{Environment, EnvironmentPreset, Ipv4Block};
pub use module_id::{ModuleId, ModuleIdError};
pub use table::{
    Backfill, CellValue, ColumnDef, ColumnType, NormalizedTable, Row, SchemaError, TableSchema,
    TelemetryRecord,
};
pub use time::{TimeWindow, TimeWindowError};
pub use vendor::Vendor;
