//! Per-device entity generators for the gRPC generator.
//!
//! Each generator draws the records for one device. [`DeviceInventory`]
//! bundles a device with all of its records so the sampler can look them up
//! without scanning flat lists.

pub mod interface;
pub mod mpls;
pub mod tcam;
pub mod vrf;
pub mod vxlan;

pub use interface::{generate_interfaces, InterfaceEntry, QueueStats};
pub use mpls::{generate_mpls, MplsEntry};
pub use tcam::{generate_tcam, TcamEntry};
pub use vrf::{generate_vrfs, VrfEntry};
pub use vxlan::{generate_vxlan, VniLayer, VxlanEntry};

use crate::grpc::device::GrpcDevice;
use netsim_core::EnvironmentPreset;
use rand::Rng;
use tracing::info;

/// A device and every entity generated for it.
#[derive(Debug, Clone)]
pub struct DeviceInventory {
    pub device: GrpcDevice,
    pub interfaces: Vec<InterfaceEntry>,
    pub vrfs: Vec<VrfEntry>,
    pub vxlan: Vec<VxlanEntry>,
    pub mpls: Vec<MplsEntry>,
    pub tcam: Vec<TcamEntry>,
}

impl DeviceInventory {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        device: GrpcDevice,
        preset: &EnvironmentPreset,
    ) -> Self {
        let interfaces = generate_interfaces(rng, &device, preset);
        let vrfs = generate_vrfs(rng, &device);
        let vxlan = generate_vxlan(rng, &device);
        let mpls = generate_mpls(rng, &device);
        let tcam = generate_tcam(rng, &device);
        Self {
            device,
            interfaces,
            vrfs,
            vxlan,
            mpls,
            tcam,
        }
    }
}

/// Entity totals across an inventory, for progress logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryCounts {
    pub devices: usize,
    pub interfaces: usize,
    pub vrfs: usize,
    pub vxlan: usize,
    pub mpls: usize,
    pub tcam: usize,
}

impl InventoryCounts {
    pub fn of(inventory: &[DeviceInventory]) -> Self {
        inventory.iter().fold(
            Self {
                devices: inventory.len(),
                ..Self::default()
            },
            |acc, d| Self {
                interfaces: acc.interfaces + d.interfaces.len(),
                vrfs: acc.vrfs + d.vrfs.len(),
                vxlan: acc.vxlan + d.vxlan.len(),
                mpls: acc.mpls + d.mpls.len(),
                tcam: acc.tcam + d.tcam.len(),
                ..acc
            },
        )
    }
}

/// Generate entities for every device and log the totals.
pub fn generate_inventory<R: Rng + ?Sized>(
    rng: &mut R,
    devices: Vec<GrpcDevice>,
    preset: &EnvironmentPreset,
) -> Vec<DeviceInventory> {
    let inventory: Vec<DeviceInventory> = devices
        .into_iter()
        .map(|device| DeviceInventory::generate(rng, device, preset))
        .collect();

    let counts = InventoryCounts::of(&inventory);
    info!("Generated {} device configurations", counts.devices);
    info!("Generated {} interfaces", counts.interfaces);
    info!("Generated {} VRF entries", counts.vrfs);
    info!("Generated {} VXLAN/VNI entries", counts.vxlan);
    info!("Generated {} MPLS entries", counts.mpls);
    info!("Generated {} TCAM resource entries", counts.tcam);
    inventory
}
