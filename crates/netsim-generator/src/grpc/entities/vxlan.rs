//! VXLAN VNIs with their EVPN state.

use crate::grpc::device::GrpcDevice;
use netsim_core::random::{pick, random_ten_net_ip};
use netsim_core::vocab::{VRF_NAMES, VXLAN_PROTOCOLS};
use rand::Rng;

/// Upper bound on VNI entries per device.
const MAX_VNIS_PER_DEVICE: i64 = 1000;

const DOWN_REASONS: &[&str] = &["Link flap", "Protocol down", "Configuration error"];

/// Layer-specific part of a VNI. A VNI is either bridged or routed.
#[derive(Debug, Clone, PartialEq)]
pub enum VniLayer {
    L2 { vlan_id: i64, mac_count: i64 },
    L3 { vrf_name: String, route_count: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VxlanEntry {
    /// 24-bit VXLAN network identifier.
    pub vni_id: i64,
    pub layer: VniLayer,
    /// EVPN route type: 2 for MAC/IP, 5 for IP prefix.
    pub evpn_type: i64,
    pub evpn_routes: i64,
    pub vtep_count: i64,
    pub local_vtep: String,
    pub protocol: &'static str,
    pub status: &'static str,
    pub reason: Option<&'static str>,
}

impl VxlanEntry {
    pub fn is_l2(&self) -> bool {
        matches!(self.layer, VniLayer::L2 { .. })
    }

    pub fn is_l3(&self) -> bool {
        !self.is_l2()
    }

    pub fn vlan_id(&self) -> Option<i64> {
        match self.layer {
            VniLayer::L2 { vlan_id, .. } => Some(vlan_id),
            VniLayer::L3 { .. } => None,
        }
    }

    pub fn mac_count(&self) -> Option<i64> {
        match self.layer {
            VniLayer::L2 { mac_count, .. } => Some(mac_count),
            VniLayer::L3 { .. } => None,
        }
    }

    pub fn vrf_name(&self) -> Option<&str> {
        match &self.layer {
            VniLayer::L2 { .. } => None,
            VniLayer::L3 { vrf_name, .. } => Some(vrf_name),
        }
    }

    pub fn route_count(&self) -> Option<i64> {
        match self.layer {
            VniLayer::L2 { .. } => None,
            VniLayer::L3 { route_count, .. } => Some(route_count),
        }
    }

    /// An L2 VNI that is up, used when a device has no VNIs to sample.
    pub fn fallback<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            vni_id: rng.gen_range(10_000..=16_777_215),
            layer: VniLayer::L2 {
                vlan_id: rng.gen_range(1..=4094),
                mac_count: rng.gen_range(10..=2000),
            },
            evpn_type: 2,
            evpn_routes: rng.gen_range(10..=100),
            vtep_count: rng.gen_range(2..=10),
            local_vtep: random_ten_net_ip(rng),
            protocol: "BGP-EVPN",
            status: "Up",
            reason: None,
        }
    }
}

/// VNIs of one device: five per VXLAN tunnel, capped at 1000.
pub fn generate_vxlan<R: Rng + ?Sized>(rng: &mut R, device: &GrpcDevice) -> Vec<VxlanEntry> {
    let tunnels = device.vxlan_tunnels.max(1);
    let count = (tunnels * 5).min(MAX_VNIS_PER_DEVICE);

    (0..count)
        .map(|_| {
            let vni_id = rng.gen_range(10_000..=16_777_215);
            let l2 = rng.gen::<f64>() > 0.3;
            let layer = if l2 {
                VniLayer::L2 {
                    vlan_id: rng.gen_range(1..=4094),
                    mac_count: rng.gen_range(10..=2000),
                }
            } else {
                VniLayer::L3 {
                    vrf_name: pick(rng, VRF_NAMES).to_string(),
                    route_count: rng.gen_range(100..=5000),
                }
            };
            let (evpn_type, evpn_routes) = if l2 {
                (2, rng.gen_range(10..=100))
            } else {
                (5, rng.gen_range(100..=1000))
            };
            let vtep_count = rng.gen_range(2..=100);
            let local_vtep = random_ten_net_ip(rng);
            let protocol = *pick(rng, VXLAN_PROTOCOLS);
            let status = if rng.gen_bool(0.8) { "Up" } else { "Down" };
            let reason = if rng.gen::<f64>() > 0.2 {
                None
            } else {
                Some(*pick(rng, DOWN_REASONS))
            };

            VxlanEntry {
                vni_id,
                layer,
                evpn_type,
                evpn_routes,
                vtep_count,
                local_vtep,
                protocol,
                status,
                reason,
            }
        })
        .collect()
}
