//! Arista EOS native paths (`eos_native:/show/...`).

use super::{fraction_pct, MacTableStats, VendorFormatter};
use crate::grpc::data_type::DataType;
use crate::grpc::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use crate::grpc::paths::subscription_path;
use netsim_core::random::round_to;
use netsim_core::Vendor;
use rand::{Rng, RngCore};
use serde_json::{json, Map, Value};

pub struct AristaFormatter;

fn keyed(data_type: DataType, body: Value) -> Value {
    let mut root = Map::new();
    root.insert(
        subscription_path(Vendor::Arista, data_type).to_string(),
        body,
    );
    Value::Object(root)
}

impl VendorFormatter for AristaFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value {
        keyed(
            DataType::RouteTable,
            json!({
                "routes": {
                    "total": vrf.route_count,
                    "bgp": vrf.bgp_routes,
                    "ospf": vrf.ospf_routes,
                    "static": vrf.static_routes,
                    "directly_connected": vrf.connected_routes,
                    "vrf": vrf.vrf_name
                }
            }),
        )
    }

    fn ecmp(&self, vrf: &VrfEntry) -> Value {
        keyed(
            DataType::Ecmp,
            json!({
                "statistics": {
                    "routes_with_ecmp": vrf.ecmp_routes,
                    "ecmp_groups": vrf.ecmp_groups,
                    "members_per_group_avg": round_to(vrf.ecmp_routes as f64 / vrf.ecmp_groups.max(1) as f64, 2)
                }
            }),
        )
    }

    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value {
        let status = if vrf.fib_synced {
            "Synchronized"
        } else {
            "Not synchronized"
        };
        keyed(
            DataType::Fib,
            json!({
                "fib": {
                    "status": status,
                    "route_count": fib_size,
                    "hardware_entries": fib_size
                }
            }),
        )
    }

    fn mac_table(&self, mac: &MacTableStats) -> Value {
        let dynamic = (mac.mac_count as f64 * 0.9) as i64;
        keyed(
            DataType::MacTable,
            json!({
                "mac_addresses": {
                    "dynamic": dynamic,
                    "static": mac.mac_count - dynamic,
                    "total": mac.mac_count,
                    "total_capacity": mac.mac_capacity
                }
            }),
        )
    }

    fn qos(&self, iface: &InterfaceEntry, rng: &mut dyn RngCore) -> Value {
        keyed(
            DataType::Qos,
            json!({
                "interface": {
                    "name": iface.name,
                    "queues": {
                        "control_plane": {
                            "drops": rng.gen_range(0..=10),
                            "depth": rng.gen_range(0..=500)
                        },
                        "data": {
                            "drops": iface.max_queue_drops.unwrap_or(0),
                            "depth": iface.max_queue_depth.unwrap_or(0)
                        }
                    }
                }
            }),
        )
    }

    fn tcam(&self, tcam: &TcamEntry) -> Value {
        keyed(
            DataType::Tcam,
            json!({
                "resources": [{
                    "name": tcam.resource,
                    "used": tcam.used,
                    "free": tcam.capacity - tcam.used,
                    "utilization_pct": fraction_pct(tcam.utilization)
                }]
            }),
        )
    }

    fn vxlan(&self, vni: &VxlanEntry, data_type: DataType) -> Value {
        keyed(
            data_type,
            json!({
                "vnis": [{
                    "vni": vni.vni_id,
                    "mode": if vni.is_l2() { "L2" } else { "L3" },
                    "vlan": vni.vlan_id(),
                    "vrf": vni.vrf_name(),
                    "source_interface": "Loopback0",
                    "flood_list": format!("{} VTEPs", vni.vtep_count),
                    "status": vni.status
                }]
            }),
        )
    }

    fn mpls(&self, mpls: &MplsEntry) -> Value {
        keyed(
            DataType::Mpls,
            json!({
                "services": [{
                    "service": mpls.service,
                    "labelCount": mpls.label_count,
                    "labelMin": mpls.label_min,
                    "labelMax": mpls.label_max,
                    "tunnels": mpls.tunnels,
                    "tunnelsUp": mpls.tunnels_up
                }]
            }),
        )
    }

    fn congestion(&self, iface: &InterfaceEntry) -> Value {
        keyed(
            DataType::Congestion,
            json!({
                "interfaces": [{
                    "interface": iface.name,
                    "congestion_drops": {
                        "unicast": iface.congestion_drops,
                        "multicast": (iface.congestion_drops as f64 * 0.1) as i64
                    }
                }]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_qos_control_plane_counters_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let iface = InterfaceEntry::fallback(&mut rng);
        let value = AristaFormatter.qos(&iface, &mut rng);
        let queues = &value["eos_native:/show/qos/interfaces"]["interface"]["queues"];
        let drops = queues["control_plane"]["drops"].as_i64().unwrap();
        assert!((0..=10).contains(&drops));
        assert_eq!(queues["data"]["depth"], iface.max_queue_depth.unwrap());
    }

    #[test]
    fn test_mac_split_adds_up() {
        let value = AristaFormatter.mac_table(&MacTableStats {
            mac_count: 1001,
            mac_capacity: 5000,
        });
        let macs = &value["eos_native:/show/mac/address-table/count"]["mac_addresses"];
        assert_eq!(
            macs["dynamic"].as_i64().unwrap() + macs["static"].as_i64().unwrap(),
            1001
        );
    }
}
