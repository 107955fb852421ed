//! Device hardware profiles for the gRPC generator.

use crate::topology::DeviceIdentity;
use netsim_core::random::{pick, rand_between, uniform};
use netsim_core::vocab::ECMP_LOAD_BALANCE;
use netsim_core::EnvironmentPreset;
use rand::Rng;

/// Port the simulated gNMI servers listen on.
pub const GRPC_PORT: u16 = 57400;

/// A device plus the hardware and protocol capacities its telemetry reports.
#[derive(Debug, Clone, PartialEq)]
pub struct GrpcDevice {
    pub identity: DeviceIdentity,
    pub grpc_port: u16,
    /// Seconds since boot.
    pub uptime: i64,
    pub route_table_size: i64,
    pub route_table_capacity: i64,
    pub mac_table_size: i64,
    pub mac_table_capacity: i64,
    /// Fraction of TCAM in use.
    pub tcam_utilization: f64,
    pub tcam_capacity: i64,
    pub fib_synced: bool,
    pub fib_size: i64,
    pub ecmp_groups: i64,
    pub ecmp_members: i64,
    pub ecmp_load_balance: &'static str,
    pub vxlan_tunnels: i64,
    pub mpls_tunnels: i64,
    pub vni_count: i64,
    pub evpn_routes: i64,
    pub qos_profiles: u32,
}

impl GrpcDevice {
    /// Draw a profile for `identity` within the preset's capacity ranges.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        identity: DeviceIdentity,
        preset: &EnvironmentPreset,
    ) -> Self {
        let route_table_capacity = draw_range(rng, preset.route_table_size);
        let mac_table_capacity = draw_range(rng, preset.mac_table_size);
        let tcam_capacity = draw_range(rng, preset.tcam_size);

        // 60-85% utilisation is the normal operating range.
        let route_table_size = (route_table_capacity as f64 * uniform(rng, 0.60, 0.85)) as i64;
        let mac_table_size = (mac_table_capacity as f64 * uniform(rng, 0.60, 0.85)) as i64;
        let tcam_utilization = uniform(rng, 0.60, 0.85);

        let fib_synced = rng.gen::<f64>() > 0.05;
        let ecmp_groups = rand_between(rng, 100, (route_table_size / 10).min(10_000));
        let ecmp_members = rng.gen_range(2..=64);
        let ecmp_load_balance = *pick(rng, ECMP_LOAD_BALANCE);

        // Disabled features still report a handful of tunnels.
        let vxlan_tunnels = if preset.vxlan_enabled {
            rng.gen_range(10..=1000)
        } else {
            rng.gen_range(1..=10)
        };
        let mpls_tunnels = if preset.mpls_enabled {
            rng.gen_range(10..=1000)
        } else {
            rng.gen_range(1..=10)
        };
        let (vni_count, evpn_routes) = if preset.vxlan_enabled {
            (rng.gen_range(10..=5000), rng.gen_range(1000..=50_000))
        } else {
            (rng.gen_range(1..=100), rng.gen_range(10..=500))
        };

        Self {
            identity,
            grpc_port: GRPC_PORT,
            uptime: rng.gen_range(86_400..=31_536_000),
            route_table_size,
            route_table_capacity,
            mac_table_size,
            mac_table_capacity,
            tcam_utilization,
            tcam_capacity,
            fib_synced,
            fib_size: route_table_size,
            ecmp_groups,
            ecmp_members,
            ecmp_load_balance,
            vxlan_tunnels,
            mpls_tunnels,
            vni_count,
            evpn_routes,
            qos_profiles: preset.qos_profiles,
        }
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn ip(&self) -> String {
        self.identity.ip.to_string()
    }

    pub fn role(&self) -> &str {
        self.identity.role()
    }
}

fn draw_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (u64, u64)) -> i64 {
    rand_between(rng, lo as i64, hi as i64)
}

/// Build profiles for every device.
pub fn generate_devices<R: Rng + ?Sized>(
    rng: &mut R,
    identities: Vec<DeviceIdentity>,
    preset: &EnvironmentPreset,
) -> Vec<GrpcDevice> {
    identities
        .into_iter()
        .map(|identity| GrpcDevice::generate(rng, identity, preset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::setup_devices;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_profile_within_preset_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = EnvironmentPreset::datacenter();
        let identities = setup_devices(&mut rng, &preset, 50).unwrap();
        for device in generate_devices(&mut rng, identities, &preset) {
            assert_eq!(device.grpc_port, 57400);
            assert!((10_000..=100_000).contains(&device.route_table_capacity));
            assert!(device.route_table_size <= device.route_table_capacity);
            assert!((0.60..=0.85).contains(&device.tcam_utilization));
            assert_eq!(device.fib_size, device.route_table_size);
            assert!(device.ecmp_groups >= 100 && device.ecmp_groups <= 10_000);
            assert!((10..=1000).contains(&device.vxlan_tunnels));
            assert!((1..=10).contains(&device.mpls_tunnels));
            assert_eq!(device.qos_profiles, 8);
        }
    }

    #[test]
    fn test_small_route_table_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut preset = EnvironmentPreset::campus();
        preset.route_table_size = (100, 200);
        let identities = setup_devices(&mut rng, &preset, 10).unwrap();
        for device in generate_devices(&mut rng, identities, &preset) {
            assert_eq!(device.ecmp_groups, 100);
        }
    }
}
