//! Interfaces with QoS queue statistics.

use crate::grpc::device::GrpcDevice;
use netsim_core::random::pick;
use netsim_core::vocab::{CONGESTION_ALGORITHMS, PEER_ROLES, QOS_QUEUES, SPEEDS};
use netsim_core::EnvironmentPreset;
use rand::Rng;

const MTUS: &[i64] = &[1500, 9000, 9216];

/// One egress queue of a QoS-enabled interface.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueStats {
    pub queue_id: u32,
    pub queue_name: String,
    pub current_depth: i64,
    pub max_depth: i64,
    pub drops: i64,
    pub congestion_algorithm: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceEntry {
    pub name: String,
    pub alias: String,
    pub mtu: i64,
    pub speed: &'static str,
    pub admin_status: &'static str,
    pub oper_status: &'static str,
    pub qos_enabled: bool,
    pub qos_policy: String,
    pub qos_drops: i64,
    pub queues: Vec<QueueStats>,
    /// Sum of drops over all queues.
    pub congestion_drops: i64,
    /// Deepest current queue, when the interface has queues.
    pub max_queue_depth: Option<i64>,
    /// Most drops on a single queue, when the interface has queues.
    pub max_queue_drops: Option<i64>,
}

impl InterfaceEntry {
    /// Stand-in used when a device has no interfaces to sample.
    pub fn fallback<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            name: format!("Ethernet1/{}", rng.gen_range(1..=48)),
            alias: String::new(),
            mtu: 9000,
            speed: *pick(rng, SPEEDS),
            admin_status: "up",
            oper_status: "up",
            qos_enabled: true,
            qos_policy: String::new(),
            qos_drops: 0,
            queues: Vec::new(),
            congestion_drops: rng.gen_range(0..=10_000),
            max_queue_depth: Some(rng.gen_range(100..=10_000)),
            max_queue_drops: Some(rng.gen_range(0..=1000)),
        }
    }
}

fn random_alias<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("to_{}-{}", pick(rng, PEER_ROLES), rng.gen_range(1..=100)),
        1 => String::new(),
        _ => format!("Server{}", rng.gen_range(1..=500)),
    }
}

fn generate_queues<R: Rng + ?Sized>(rng: &mut R, profiles: u32) -> Vec<QueueStats> {
    (0..profiles)
        .map(|queue_id| {
            let queue_name = if (queue_id as usize) < QOS_QUEUES.len() {
                pick(rng, QOS_QUEUES).to_string()
            } else {
                format!("queue-{queue_id}")
            };
            let current_depth = rng.gen_range(1..=1000);
            let max_depth = rng.gen_range(1000..=10_000);
            let drops = if current_depth as f64 > max_depth as f64 * 0.8 {
                rng.gen_range(1..=1000)
            } else {
                rng.gen_range(0..=10)
            };
            QueueStats {
                queue_id,
                queue_name,
                current_depth,
                max_depth,
                drops,
                congestion_algorithm: *pick(rng, CONGESTION_ALGORITHMS),
            }
        })
        .collect()
}

/// Interfaces of one device, one per port within the preset's port density.
pub fn generate_interfaces<R: Rng + ?Sized>(
    rng: &mut R,
    device: &GrpcDevice,
    preset: &EnvironmentPreset,
) -> Vec<InterfaceEntry> {
    let (min_ports, max_ports) = preset.port_density;
    let ports = rng.gen_range(min_ports..=max_ports.max(min_ports));

    (1..=ports)
        .map(|port| {
            let name = format!("Ethernet{}/{}", rng.gen_range(1..=8), port);
            let alias = random_alias(rng);
            let mtu = *pick(rng, MTUS);

            let admin_status = *pick(rng, &["up", "down"]);
            let oper_status = if admin_status == "down" {
                "down"
            } else {
                *pick(rng, &["up", "down"])
            };
            let speed = *pick(rng, SPEEDS);

            let qos_enabled = rng.gen::<f64>() > 0.2;
            let qos_policy = if qos_enabled {
                format!("policy-{}", rng.gen_range(1..=10))
            } else {
                String::new()
            };
            let qos_drops = if oper_status == "up" {
                rng.gen_range(0..=1000)
            } else {
                0
            };

            let queues = if oper_status == "up" && qos_enabled {
                generate_queues(rng, device.qos_profiles)
            } else {
                Vec::new()
            };
            let congestion_drops = queues.iter().map(|q| q.drops).sum();
            let max_queue_depth = queues.iter().map(|q| q.current_depth).max();
            let max_queue_drops = queues.iter().map(|q| q.drops).max();

            InterfaceEntry {
                name,
                alias,
                mtu,
                speed,
                admin_status,
                oper_status,
                qos_enabled,
                qos_policy,
                qos_drops,
                queues,
                congestion_drops,
                max_queue_depth,
                max_queue_drops,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grpc::device::generate_devices;
    use crate::topology::setup_devices;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_interfaces() -> (Vec<InterfaceEntry>, u32) {
        let mut rng = StdRng::seed_from_u64(42);
        let preset = EnvironmentPreset::datacenter();
        let identities = setup_devices(&mut rng, &preset, 20).unwrap();
        let devices = generate_devices(&mut rng, identities, &preset);
        let interfaces = devices
            .iter()
            .flat_map(|d| generate_interfaces(&mut rng, d, &preset))
            .collect();
        (interfaces, preset.qos_profiles)
    }

    #[test]
    fn test_admin_down_implies_oper_down() {
        let (interfaces, _) = sample_interfaces();
        assert!(!interfaces.is_empty());
        for iface in &interfaces {
            if iface.admin_status == "down" {
                assert_eq!(iface.oper_status, "down", "{}", iface.name);
            }
        }
    }

    #[test]
    fn test_queues_only_on_up_qos_interfaces() {
        let (interfaces, profiles) = sample_interfaces();
        for iface in &interfaces {
            if iface.oper_status == "up" && iface.qos_enabled {
                assert_eq!(iface.queues.len(), profiles as usize);
            } else {
                assert!(iface.queues.is_empty());
                assert_eq!(iface.congestion_drops, 0);
                assert_eq!(iface.max_queue_depth, None);
            }
        }
    }

    #[test]
    fn test_congestion_drops_sum_queue_drops() {
        let (interfaces, _) = sample_interfaces();
        for iface in &interfaces {
            let total: i64 = iface.queues.iter().map(|q| q.drops).sum();
            assert_eq!(iface.congestion_drops, total);
        }
    }
}
