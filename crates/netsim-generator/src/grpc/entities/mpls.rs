//! MPLS services and their label usage.

use crate::grpc::device::GrpcDevice;
use netsim_core::random::{pick, uniform};
use netsim_core::vocab::MPLS_SERVICES;
use rand::seq::SliceRandom;
use rand::Rng;

/// Highest MPLS label value (20 bits).
pub const LABEL_MAX: i64 = 1_048_575;

#[derive(Debug, Clone, PartialEq)]
pub struct MplsEntry {
    pub service: &'static str,
    pub label_count: i64,
    pub label_min: i64,
    pub label_max: i64,
    pub tunnels: i64,
    pub tunnels_up: i64,
    pub status: &'static str,
    /// Signalling protocol family: `MPLS`, `BGP` or `Mixed`.
    pub protocol: &'static str,
}

impl MplsEntry {
    /// Stand-in used when a device has no MPLS services to sample.
    pub fn fallback<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let tunnels = rng.gen_range(1..=100);
        Self {
            service: *pick(rng, MPLS_SERVICES),
            label_count: rng.gen_range(100..=5000),
            label_min: 16,
            label_max: LABEL_MAX,
            tunnels,
            tunnels_up: rng.gen_range(0..=tunnels),
            status: "Enabled",
            protocol: "MPLS",
        }
    }
}

fn signalling_protocol(service: &str) -> &'static str {
    match service {
        "LDP" | "RSVP-TE" => "MPLS",
        "L3VPN" | "EVPN" => "BGP",
        _ => "Mixed",
    }
}

/// One entry per MPLS service enabled on the device.
pub fn generate_mpls<R: Rng + ?Sized>(rng: &mut R, device: &GrpcDevice) -> Vec<MplsEntry> {
    let tunnels = device.mpls_tunnels.max(1);
    let enabled = rng.gen_range(1..=MPLS_SERVICES.len());

    MPLS_SERVICES
        .choose_multiple(rng, enabled)
        .copied()
        .collect::<Vec<_>>()
        .into_iter()
        .map(|service| {
            let label_min = if service == "RSVP-TE" { 1000 } else { 16 };
            let label_count = match service {
                "LDP" | "SR-MPLS" => {
                    (device.route_table_size as f64 * uniform(rng, 0.05, 0.2)) as i64
                }
                "L3VPN" | "EVPN" => rng.gen_range(100..=5000),
                _ => rng.gen_range(10..=3000),
            };
            let tunnel_count = rng.gen_range(1..=tunnels);
            let tunnels_up = (tunnel_count as f64 * uniform(rng, 0.8, 1.0)) as i64;

            MplsEntry {
                service,
                label_count,
                label_min,
                label_max: LABEL_MAX,
                tunnels: tunnel_count,
                tunnels_up: tunnels_up.min(tunnel_count),
                status: "Enabled",
                protocol: signalling_protocol(service),
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
    fn test_mpls_entries_are_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = EnvironmentPreset::isp();
        let identities = setup_devices(&mut rng, &preset, 20).unwrap();
        for device in generate_devices(&mut rng, identities, &preset) {
            let entries = generate_mpls(&mut rng, &device);
            assert!(!entries.is_empty() && entries.len() <= MPLS_SERVICES.len());
            for entry in entries {
                assert!(entry.tunnels_up <= entry.tunnels);
                assert!(entry.tunnels >= 1 && entry.tunnels <= device.mpls_tunnels.max(1));
                assert_eq!(entry.label_max, LABEL_MAX);
                let expected_min = if entry.service == "RSVP-TE" { 1000 } else { 16 };
                assert_eq!(entry.label_min, expected_min);
            }
        }
    }

    #[test]
    fn test_signalling_protocol() {
        assert_eq!(signalling_protocol("LDP"), "MPLS");
        assert_eq!(signalling_protocol("EVPN"), "BGP");
        assert_eq!(signalling_protocol("VPLS"), "Mixed");
    }
}
