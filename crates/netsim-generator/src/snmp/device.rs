//! SNMPv2-MIB system group for simulated devices.

use crate::topology::DeviceIdentity;
use netsim_core::random::pick;
use netsim_core::vocab::OS_NAMES;
use rand::Rng;

/// A device as seen through its system group and host resources.
#[derive(Debug, Clone, PartialEq)]
pub struct SnmpDevice {
    pub identity: DeviceIdentity,
    /// Enterprise OID subtree of the vendor, e.g. `1.3.6.1.4.1.9`.
    pub oid_prefix: &'static str,
    pub sys_descr: String,
    /// Seconds since boot.
    pub sys_uptime: i64,
    pub sys_contact: String,
    pub sys_location: String,
    pub cpu_5s: i64,
    pub cpu_1m: i64,
    pub cpu_5m: i64,
    pub memory_used: i64,
    pub memory_total: i64,
}

impl SnmpDevice {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, identity: DeviceIdentity) -> Self {
        let vendor = identity.vendor;
        let sys_descr = format!(
            "{} {} Software, Version {}.{}.{}",
            vendor,
            pick(rng, OS_NAMES),
            rng.gen_range(7..=18),
            rng.gen_range(1..=9),
            rng.gen_range(1..=5)
        );
        let sys_contact = format!("admin@{}.example.com", identity.role());
        let sys_location = format!(
            "DC{}-Rack{}-U{}",
            rng.gen_range(1..=4),
            rng.gen_range(1..=100),
            rng.gen_range(1..=42)
        );

        Self {
            oid_prefix: vendor.oid_prefix(),
            sys_descr,
            sys_uptime: rng.gen_range(86_400..=31_536_000),
            sys_contact,
            sys_location,
            cpu_5s: rng.gen_range(5..=70),
            cpu_1m: rng.gen_range(5..=60),
            cpu_5m: rng.gen_range(5..=50),
            memory_used: rng.gen_range(1_000_000..=8_000_000_000),
            memory_total: rng.gen_range(8_000_000_000..=16_000_000_000),
            identity,
        }
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

pub fn generate_devices<R: Rng + ?Sized>(
    rng: &mut R,
    identities: Vec<DeviceIdentity>,
) -> Vec<SnmpDevice> {
    identities
        .into_iter()
        .map(|identity| SnmpDevice::generate(rng, identity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::setup_devices;
    use netsim_core::EnvironmentPreset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_system_group() {
        let mut rng = StdRng::seed_from_u64(42);
        let identities = setup_devices(&mut rng, &EnvironmentPreset::isp(), 20).unwrap();
        for device in generate_devices(&mut rng, identities) {
            assert!(device.sys_descr.starts_with(device.identity.vendor.as_str()));
            assert_eq!(
                device.sys_contact,
                format!("admin@{}.example.com", device.identity.role())
            );
            assert!(device.sys_location.starts_with("DC"));
            assert!(device.oid_prefix.starts_with("1.3.6.1.4.1."));
            assert!(device.memory_used < device.memory_total);
        }
    }
}
