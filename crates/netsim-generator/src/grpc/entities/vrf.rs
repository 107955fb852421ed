//! VRF routing tables and their per-protocol breakdown.

use crate::grpc::device::GrpcDevice;
use netsim_core::random::{rand_between, uniform};
use netsim_core::vocab::VRF_NAMES;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct VrfEntry {
    pub vrf_name: String,
    pub route_count: i64,
    pub bgp_routes: i64,
    pub ospf_routes: i64,
    pub static_routes: i64,
    pub connected_routes: i64,
    pub ecmp_routes: i64,
    pub ecmp_groups: i64,
    pub fib_synced: bool,
}

impl VrfEntry {
    /// Stand-in used when a device has no VRFs to sample.
    pub fn fallback(device: &GrpcDevice) -> Self {
        let route_count = device.route_table_size;
        let bgp_routes = (route_count as f64 * 0.6) as i64;
        let ospf_routes = (route_count as f64 * 0.3) as i64;
        Self {
            vrf_name: "default".to_string(),
            route_count,
            bgp_routes,
            ospf_routes,
            static_routes: 0,
            connected_routes: route_count - bgp_routes - ospf_routes,
            ecmp_routes: (route_count as f64 * 0.4) as i64,
            ecmp_groups: device.ecmp_groups,
            fib_synced: device.fib_synced,
        }
    }
}

/// Route share ranges for BGP, OSPF and static routes by device role.
struct ProtocolMix {
    bgp: (f64, f64),
    ospf: (f64, f64),
    static_: (f64, f64),
}

fn protocol_mix(name: &str) -> ProtocolMix {
    if name.contains("pe") || name.contains("core") {
        ProtocolMix {
            bgp: (0.6, 0.8),
            ospf: (0.1, 0.2),
            static_: (0.05, 0.1),
        }
    } else if name.contains("leaf") {
        ProtocolMix {
            bgp: (0.4, 0.6),
            ospf: (0.1, 0.2),
            static_: (0.05, 0.1),
        }
    } else {
        ProtocolMix {
            bgp: (0.3, 0.5),
            ospf: (0.2, 0.3),
            static_: (0.1, 0.2),
        }
    }
}

fn vrf_count<R: Rng + ?Sized>(rng: &mut R, name: &str) -> usize {
    if name.contains("pe") || name.contains("edge") {
        rng.gen_range(5..=50)
    } else if name.contains("leaf") {
        rng.gen_range(3..=10)
    } else {
        rng.gen_range(1..=5)
    }
}

fn share<R: Rng + ?Sized>(rng: &mut R, total: i64, (lo, hi): (f64, f64)) -> i64 {
    (total as f64 * uniform(rng, lo, hi)) as i64
}

/// VRFs of one device. The first few take the well-known names, the rest
/// are `vrf-<n>`.
///
/// Connected routes take the remainder, so the four protocol counts always
/// add up to `route_count`. Static routes are capped so the remainder is
/// never negative.
pub fn generate_vrfs<R: Rng + ?Sized>(rng: &mut R, device: &GrpcDevice) -> Vec<VrfEntry> {
    let name = device.name();
    let count = vrf_count(rng, name);
    let mix = protocol_mix(name);

    (0..count)
        .map(|v| {
            let vrf_name = VRF_NAMES
                .get(v)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("vrf-{}", rng.gen_range(1..=1000)));
            let is_default = vrf_name == "default";

            let route_count = if is_default {
                device.route_table_size
            } else {
                rand_between(rng, 100, device.route_table_size / 10)
            };

            let bgp_routes = share(rng, route_count, mix.bgp);
            let ospf_routes = share(rng, route_count, mix.ospf);
            let static_routes =
                share(rng, route_count, mix.static_).min(route_count - bgp_routes - ospf_routes);
            let connected_routes = route_count - bgp_routes - ospf_routes - static_routes;

            let (ecmp_routes, ecmp_groups) = if is_default {
                (share(rng, bgp_routes, (0.1, 0.3)), device.ecmp_groups)
            } else {
                (
                    share(rng, bgp_routes, (0.05, 0.2)),
                    rand_between(rng, 10, device.ecmp_groups / 5),
                )
            };

            VrfEntry {
                vrf_name,
                route_count,
                bgp_routes,
                ospf_routes,
                static_routes,
                connected_routes,
                ecmp_routes,
                ecmp_groups,
                fib_synced: device.fib_synced,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grpc::device::generate_devices;
    use crate::topology::setup_devices;
    use netsim_core::EnvironmentPreset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_route_components_sum_to_total() {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = EnvironmentPreset::complete();
        let identities = setup_devices(&mut rng, &preset, 40).unwrap();
        for device in generate_devices(&mut rng, identities, &preset) {
            let vrfs = generate_vrfs(&mut rng, &device);
            assert!(!vrfs.is_empty());
            for vrf in vrfs {
                assert_eq!(
                    vrf.bgp_routes + vrf.ospf_routes + vrf.static_routes + vrf.connected_routes,
                    vrf.route_count
                );
                assert!(vrf.connected_routes >= 0);
            }
        }
    }

    #[test]
    fn test_default_vrf_carries_device_totals() {
        let mut rng = StdRng::seed_from_u64(7);
        let preset = EnvironmentPreset::datacenter();
        let identities = setup_devices(&mut rng, &preset, 10).unwrap();
        for device in generate_devices(&mut rng, identities, &preset) {
            let vrfs = generate_vrfs(&mut rng, &device);
            let default = &vrfs[0];
            assert_eq!(default.vrf_name, "default");
            assert_eq!(default.route_count, device.route_table_size);
            assert_eq!(default.ecmp_groups, device.ecmp_groups);
        }
    }

    #[test]
    fn test_vrf_names_extend_past_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = EnvironmentPreset::isp();
        let identities = setup_devices(&mut rng, &preset, 30).unwrap();
        let names: Vec<String> = generate_devices(&mut rng, identities, &preset)
            .iter()
            .flat_map(|d| generate_vrfs(&mut rng, d))
            .map(|v| v.vrf_name)
            .collect();
        assert!(names.iter().any(|n| n.starts_with("vrf-")));
    }
}
