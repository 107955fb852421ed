//! Synthetic network telemetry generators.
//!
//! Five datasets are produced from shared vocabularies in `netsim-core`:
//!
//! - [`grpc`] - gNMI subscription samples with vendor-shaped JSON payloads
//! - [`snmp`] - IF-MIB interface polls with optical readings
//! - [`syslog`] - vendor syslog lines tagged with the module they concern
//! - [`ddm`] - optical DDM readings with injected faults
//! - [`prediction`] - remaining-life predictions per module
//!
//! Every generator takes the run RNG explicitly, so a seeded RNG reproduces
//! a dataset exactly. Records implement
//! [`TelemetryRecord`](netsim_core::TelemetryRecord) and go through
//! [`NormalizedTable`](netsim_core::NormalizedTable) before being written.

pub mod ddm;
pub mod error;
pub mod grpc;
pub mod prediction;
pub mod snmp;
pub mod syslog;
pub mod topology;

pub use ddm::{generate_ddm, DdmRecord, DdmValues};
pub use error::GeneratorError;
pub use grpc::{GrpcSample, GrpcSampler};
pub use prediction::{generate_predictions, PredictionRecord};
pub use snmp::{SnmpInventory, SnmpSample, SnmpSampler};
pub use syslog::{SyslogContext, SyslogRecord, SyslogSampler};
pub use topology::{clamp_device_count, setup_devices, DeviceIdentity};
