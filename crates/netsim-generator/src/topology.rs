//! Simulated device inventory shared by the gRPC, SNMP and syslog generators.

use crate::error::GeneratorError;
use netsim_core::random::pick;
use netsim_core::{EnvironmentPreset, Vendor};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::net::Ipv4Addr;
use tracing::debug;

/// Name, management address and vendor of one simulated device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Hostname such as `leaf-12-3`.
    pub name: String,
    pub ip: Ipv4Addr,
    pub vendor: Vendor,
}

impl DeviceIdentity {
    /// Role prefix of the hostname, e.g. `leaf` for `leaf-12-3`.
    pub fn role(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }
}

/// Clamp a requested device count to what the preset's address block holds.
pub fn clamp_device_count(preset: &EnvironmentPreset, requested: u64) -> u64 {
    requested.clamp(1, preset.network.host_count().max(1))
}

/// Draw `count` devices for an environment.
///
/// Addresses are the first hosts of the preset's block, names are
/// `<prefix>-<1..100>-<1..10>` and vendors favour the preset's primary
/// vendors.
pub fn setup_devices<R: Rng + ?Sized>(
    rng: &mut R,
    preset: &EnvironmentPreset,
    count: u64,
) -> Result<Vec<DeviceIdentity>, GeneratorError> {
    let count = clamp_device_count(preset, count);
    let vendor_dist = WeightedIndex::new(preset.vendor_weights())?;

    let devices: Vec<DeviceIdentity> = (0..count)
        .map_while(|i| preset.network.host(i))
        .map(|ip| {
            let name = format!(
                "{}-{}-{}",
                pick(rng, preset.device_prefixes),
                rng.gen_range(1..=100),
                rng.gen_range(1..=10)
            );
            let vendor = Vendor::ALL[vendor_dist.sample(rng)];
            DeviceIdentity { name, ip, vendor }
        })
        .collect();

    debug!(
        "Set up {} devices in {} for {}",
        devices.len(),
        preset.network,
        preset.environment
    );
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsim_core::Environment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_devices_use_first_hosts_of_block() {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = EnvironmentPreset::enterprise();
        let devices = setup_devices(&mut rng, &preset, 3).unwrap();
        let ips: Vec<String> = devices.iter().map(|d| d.ip.to_string()).collect();
        assert_eq!(ips, vec!["192.168.0.1", "192.168.0.2", "192.168.0.3"]);
        for device in &devices {
            assert!(preset.device_prefixes.contains(&device.role()));
        }
    }

    #[test]
    fn test_device_count_is_clamped() {
        let preset = EnvironmentPreset::datacenter();
        assert_eq!(clamp_device_count(&preset, 0), 1);
        assert_eq!(clamp_device_count(&preset, 50), 50);
        assert_eq!(
            clamp_device_count(&preset, u64::MAX),
            preset.network.host_count()
        );
    }

    #[test]
    fn test_primary_vendors_are_favoured() {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = Environment::Isp.preset();
        let devices = setup_devices(&mut rng, &preset, 2000).unwrap();
        let primary = devices
            .iter()
            .filter(|d| preset.primary_vendors.contains(&d.vendor))
            .count();
        // 3 primary at 0.7 vs 4 others at 0.3: about 64% primary.
        assert!(primary > 1000, "primary share too low: {primary}");
    }
}
