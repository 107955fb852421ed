//! Environment presets: named bundles of generation parameters that simulate
//! a kind of network deployment.

use crate::vendor::Vendor;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Deployment type being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Datacenter,
    Enterprise,
    Isp,
    Campus,
    Complete,
}

impl Environment {
    pub const ALL: [Environment; 5] = [
        Environment::Datacenter,
        Environment::Enterprise,
        Environment::Isp,
        Environment::Campus,
        Environment::Complete,
    ];

    /// Resolve a preset by name, falling back to `datacenter` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(env) => env,
            Err(_) => {
                tracing::warn!("Unknown environment '{name}', falling back to datacenter");
                Environment::Datacenter
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Datacenter => "datacenter",
            Environment::Enterprise => "enterprise",
            Environment::Isp => "isp",
            Environment::Campus => "campus",
            Environment::Complete => "complete",
        }
    }

    /// Full parameter set for this environment.
    pub fn preset(&self) -> EnvironmentPreset {
        EnvironmentPreset::by_environment(*self)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "datacenter" | "dc" => Ok(Environment::Datacenter),
            "enterprise" => Ok(Environment::Enterprise),
            "isp" => Ok(Environment::Isp),
            "campus" => Ok(Environment::Campus),
            "complete" => Ok(Environment::Complete),
            _ => Err(format!("Unknown environment: {s}")),
        }
    }
}

/// An IPv4 block devices draw their management addresses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Block {
    pub network: Ipv4Addr,
    pub prefix_len: u8,
}

impl Ipv4Block {
    pub const fn new(network: Ipv4Addr, prefix_len: u8) -> Self {
        Self {
            network,
            prefix_len,
        }
    }

    /// Number of usable host addresses (network and broadcast excluded).
    pub fn host_count(&self) -> u64 {
        let size = 1u64 << (32 - u32::from(self.prefix_len.min(32)));
        size.saturating_sub(2)
    }

    /// The `index`-th usable host address, or `None` past the end of the block.
    pub fn host(&self, index: u64) -> Option<Ipv4Addr> {
        if index >= self.host_count() {
            return None;
        }
        let base = u32::from(self.network);
        Some(Ipv4Addr::from(base + 1 + index as u32))
    }
}

impl std::fmt::Display for Ipv4Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

/// Complete preset configuration.
#[derive(Debug, Clone)]
pub struct EnvironmentPreset {
    pub environment: Environment,
    /// Hostname prefixes, e.g. `spine` in `spine-12-3`.
    pub device_prefixes: &'static [&'static str],
    pub network: Ipv4Block,
    /// Vendors favoured in this deployment (weight 0.7 vs 0.3 for the rest).
    pub primary_vendors: &'static [Vendor],
    /// Inclusive range of ports per device.
    pub port_density: (u32, u32),
    pub route_table_size: (u64, u64),
    pub mac_table_size: (u64, u64),
    pub tcam_size: (u64, u64),
    pub vxlan_enabled: bool,
    pub mpls_enabled: bool,
    pub qos_profiles: u32,
    /// L3 protocols most likely to be configured, used by the syslog generator.
    pub preferred_protocols: &'static [&'static str],
}

impl EnvironmentPreset {
    /// Get preset by environment.
    pub fn by_environment(environment: Environment) -> Self {
        match environment {
            Environment::Datacenter => Self::datacenter(),
            Environment::Enterprise => Self::enterprise(),
            Environment::Isp => Self::isp(),
            Environment::Campus => Self::campus(),
            Environment::Complete => Self::complete(),
        }
    }

    pub fn datacenter() -> Self {
        Self {
            environment: Environment::Datacenter,
            device_prefixes: &["spine", "leaf", "border", "core"],
            network: Ipv4Block::new(Ipv4Addr::new(10, 0, 0, 0), 8),
            primary_vendors: &[Vendor::Cisco, Vendor::Arista, Vendor::Juniper],
            port_density: (24, 64),
            route_table_size: (10_000, 100_000),
            mac_table_size: (10_000, 100_000),
            tcam_size: (8_000, 32_000),
            vxlan_enabled: true,
            mpls_enabled: false,
            qos_profiles: 8,
            preferred_protocols: &["BGP", "VXLAN", "LLDP"],
        }
    }

    pub fn enterprise() -> Self {
        Self {
            environment: Environment::Enterprise,
            device_prefixes: &["core", "dist", "access", "edge"],
            network: Ipv4Block::new(Ipv4Addr::new(192, 168, 0, 0), 16),
            primary_vendors: &[Vendor::Cisco, Vendor::Huawei, Vendor::Juniper],
            port_density: (8, 48),
            route_table_size: (1_000, 20_000),
            mac_table_size: (5_000, 50_000),
            tcam_size: (4_000, 16_000),
            vxlan_enabled: false,
            mpls_enabled: true,
            qos_profiles: 6,
            preferred_protocols: &["OSPF", "STP", "LLDP"],
        }
    }

    pub fn isp() -> Self {
        Self {
            environment: Environment::Isp,
            device_prefixes: &["edge", "agg", "core", "pe", "p"],
            network: Ipv4Block::new(Ipv4Addr::new(100, 64, 0, 0), 10),
            primary_vendors: &[Vendor::Cisco, Vendor::Juniper, Vendor::Huawei],
            port_density: (4, 32),
            route_table_size: (100_000, 1_000_000),
            mac_table_size: (1_000, 10_000),
            tcam_size: (16_000, 64_000),
            vxlan_enabled: false,
            mpls_enabled: true,
            qos_profiles: 12,
            preferred_protocols: &["BGP", "MPLS", "ISIS"],
        }
    }

    /// Campus networks also favour Aruba, which has no telemetry dialect here.
    pub fn campus() -> Self {
        Self {
            environment: Environment::Campus,
            device_prefixes: &["bb", "dist", "access", "wifi"],
            network: Ipv4Block::new(Ipv4Addr::new(172, 16, 0, 0), 12),
            primary_vendors: &[Vendor::Cisco, Vendor::Huawei],
            port_density: (24, 48),
            route_table_size: (1_000, 10_000),
            mac_table_size: (5_000, 20_000),
            tcam_size: (2_000, 8_000),
            vxlan_enabled: true,
            mpls_enabled: false,
            qos_profiles: 4,
            preferred_protocols: &["OSPF", "STP", "VRRP"],
        }
    }

    /// Every feature enabled, every vendor primary.
    pub fn complete() -> Self {
        Self {
            environment: Environment::Complete,
            device_prefixes: &["spine", "leaf", "border", "core", "edge", "pe", "p", "agg"],
            network: Ipv4Block::new(Ipv4Addr::new(10, 0, 0, 0), 8),
            primary_vendors: &Vendor::ALL,
            port_density: (24, 64),
            route_table_size: (50_000, 200_000),
            mac_table_size: (10_000, 100_000),
            tcam_size: (8_000, 32_000),
            vxlan_enabled: true,
            mpls_enabled: true,
            qos_profiles: 12,
            preferred_protocols: &["BGP", "OSPF", "VXLAN", "MPLS", "LLDP"],
        }
    }

    /// Selection weight for each entry of [`Vendor::ALL`].
    pub fn vendor_weights(&self) -> Vec<f64> {
        Vendor::ALL
            .iter()
            .map(|v| {
                if self.primary_vendors.contains(v) {
                    0.7
                } else {
                    0.3
                }
            })
            .collect()
    }

    pub fn prefers_protocol(&self, protocol: &str) -> bool {
        self.preferred_protocols.contains(&protocol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_environment_falls_back_to_datacenter() {
        assert_eq!(Environment::from_name("moon-base"), Environment::Datacenter);
        assert_eq!(Environment::from_name("ISP"), Environment::Isp);
        assert_eq!(Environment::from_name("complete"), Environment::Complete);
    }

    #[test]
    fn test_preset_matches_environment() {
        for env in Environment::ALL {
            let preset = env.preset();
            assert_eq!(preset.environment, env);
            assert!(!preset.device_prefixes.is_empty());
            assert!(preset.port_density.0 <= preset.port_density.1);
            assert!(preset.route_table_size.0 <= preset.route_table_size.1);
        }
    }

    #[test]
    fn test_ipv4_block_hosts() {
        let block = Ipv4Block::new(Ipv4Addr::new(192, 168, 0, 0), 16);
        assert_eq!(block.host_count(), 65_534);
        assert_eq!(block.host(0), Some(Ipv4Addr::new(192, 168, 0, 1)));
        assert_eq!(block.host(255), Some(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(block.host(65_534), None);
        assert_eq!(block.to_string(), "192.168.0.0/16");
    }

    #[test]
    fn test_vendor_weights_favour_primary_vendors() {
        let preset = EnvironmentPreset::datacenter();
        let weights = preset.vendor_weights();
        assert_eq!(weights.len(), Vendor::ALL.len());
        let cisco = Vendor::ALL.iter().position(|v| *v == Vendor::Cisco).unwrap();
        let dell = Vendor::ALL.iter().position(|v| *v == Vendor::Dell).unwrap();
        assert!(weights[cisco] > weights[dell]);

        let complete = EnvironmentPreset::complete();
        assert!(complete.vendor_weights().iter().all(|w| *w == 0.7));
    }
}
