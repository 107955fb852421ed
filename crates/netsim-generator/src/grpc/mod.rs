//! gRPC/gNMI streaming telemetry.
//!
//! ```text
//! setup_devices ─▶ GrpcDevice ─▶ DeviceInventory ─▶ GrpcSampler ─▶ GrpcSample
//!                  (capacities)  (interfaces, VRFs,  (time, device,  (flattened
//!                                 VXLAN, MPLS, TCAM)  data type)      row + JSON)
//! ```

pub mod data_type;
pub mod device;
pub mod entities;
pub mod format;
pub mod paths;
pub mod sampler;

pub use data_type::DataType;
pub use device::{GrpcDevice, GRPC_PORT};
pub use entities::{DeviceInventory, InventoryCounts};
pub use format::{format_payload, SampleData, VendorFormatter, FORMAT_ERROR_MARKER};
pub use paths::{subscription_path, subscription_path_by_name, UNKNOWN_PATH};
pub use sampler::{GrpcSample, GrpcSampler};

use crate::error::GeneratorError;
use crate::topology::setup_devices;
use netsim_core::EnvironmentPreset;
use rand::Rng;

/// Devices, their profiles and every entity they carry.
pub fn build_inventory<R: Rng + ?Sized>(
    rng: &mut R,
    preset: &EnvironmentPreset,
    device_count: u64,
) -> Result<Vec<DeviceInventory>, GeneratorError> {
    let identities = setup_devices(rng, preset, device_count)?;
    let devices = device::generate_devices(rng, identities, preset);
    Ok(entities::generate_inventory(rng, devices, preset))
}
