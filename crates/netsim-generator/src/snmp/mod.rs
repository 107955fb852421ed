//! SNMP interface-table telemetry.
//!
//! Devices get an SNMPv2-MIB system group, each device an IF-MIB interface
//! table with optional optics, and the sampler polls that table round-robin
//! across the time window.

pub mod device;
pub mod interface;
pub mod sampler;

pub use device::SnmpDevice;
pub use interface::{IfCounters, Location, OpticalModule, OpticalReadings, SnmpInterface};
pub use sampler::{SnmpSample, SnmpSampler};

use crate::error::GeneratorError;
use crate::topology::setup_devices;
use netsim_core::EnvironmentPreset;
use rand::Rng;
use tracing::info;

/// Devices and their interface tables.
#[derive(Debug, Clone)]
pub struct SnmpInventory {
    pub devices: Vec<SnmpDevice>,
    pub interfaces: Vec<SnmpInterface>,
}

impl SnmpInventory {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        preset: &EnvironmentPreset,
        device_count: u64,
    ) -> Result<Self, GeneratorError> {
        let identities = setup_devices(rng, preset, device_count)?;
        let devices = device::generate_devices(rng, identities);
        info!("Generated {} device configurations", devices.len());

        let interfaces: Vec<SnmpInterface> = devices
            .iter()
            .enumerate()
            .flat_map(|(i, device)| interface::generate_interfaces(rng, i, device, preset))
            .collect();
        info!("Generated {} interfaces", interfaces.len());

        Ok(Self {
            devices,
            interfaces,
        })
    }

    /// Interfaces carrying an optical module.
    pub fn optic_count(&self) -> usize {
        self.interfaces.iter().filter(|i| i.optic.is_some()).count()
    }
}
