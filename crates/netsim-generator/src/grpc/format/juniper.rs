//! Juniper Junos, reported on OpenConfig-style paths.

use super::{fraction_pct, true_false, MacTableStats, VendorFormatter};
use crate::grpc::data_type::DataType;
use crate::grpc::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use crate::grpc::paths::subscription_path;
use netsim_core::Vendor;
use rand::RngCore;
use serde_json::{json, Map, Value};

pub struct JuniperFormatter;

/// Junos payloads are keyed by their subscription path.
fn keyed(data_type: DataType, body: Value) -> Value {
    let mut root = Map::new();
    root.insert(
        subscription_path(Vendor::Juniper, data_type).to_string(),
        body,
    );
    Value::Object(root)
}

/// The route table payload sits one level above the subscribed leaf.
const ROUTE_TABLE_KEY: &str = "/network-instances/network-instance/protocols/protocol/bgp/rib/afi-safis/afi-safi/ipv4-unicast/loc-rib/routes";

impl VendorFormatter for JuniperFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value {
        json!({
            ROUTE_TABLE_KEY: {
                "network-instance": vrf.vrf_name,
                "route-count": vrf.route_count,
                "bgp-origin": vrf.bgp_routes,
                "ospf-origin": vrf.ospf_routes,
                "static-origin": vrf.static_routes,
                "connected-origin": vrf.connected_routes
            }
        })
    }

    fn ecmp(&self, vrf: &VrfEntry) -> Value {
        keyed(
            DataType::Ecmp,
            json!({
                "network-instance": vrf.vrf_name,
                "ecmp-routes": vrf.ecmp_routes,
                "ecmp-groups": vrf.ecmp_groups
            }),
        )
    }

    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value {
        keyed(
            DataType::Fib,
            json!({
                "network-instance": vrf.vrf_name,
                "route-entries": fib_size,
                "synchronized": true_false(vrf.fib_synced)
            }),
        )
    }

    fn mac_table(&self, mac: &MacTableStats) -> Value {
        keyed(
            DataType::MacTable,
            json!({
                "network-instance": "default",
                "total-entries": mac.mac_count,
                "max-entries": mac.mac_capacity,
                "utilization": mac.utilization_pct()
            }),
        )
    }

    fn qos(&self, iface: &InterfaceEntry, _rng: &mut dyn RngCore) -> Value {
        keyed(
            DataType::Qos,
            json!({
                "component": iface.name,
                "property": "qos",
                "enabled": true_false(iface.qos_enabled),
                "queue-depth": iface.max_queue_depth.unwrap_or(0),
                "queue-drops": iface.max_queue_drops.unwrap_or(0)
            }),
        )
    }

    fn tcam(&self, tcam: &TcamEntry) -> Value {
        keyed(
            DataType::Tcam,
            json!({
                "component": "FPC0",
                "property": "tcam",
                "resource": tcam.resource,
                "used": tcam.used,
                "available": tcam.capacity - tcam.used,
                "utilization": fraction_pct(tcam.utilization)
            }),
        )
    }

    fn vxlan(&self, vni: &VxlanEntry, data_type: DataType) -> Value {
        keyed(
            data_type,
            json!({
                "network-instance": vni.vrf_name().unwrap_or("default"),
                "vni": vni.vni_id,
                "type": vni.evpn_type.to_string(),
                "status": vni.status,
                "mac-count": vni.mac_count().unwrap_or(0),
                "ip-count": vni.route_count().unwrap_or(0)
            }),
        )
    }

    fn mpls(&self, mpls: &MplsEntry) -> Value {
        keyed(
            DataType::Mpls,
            json!({
                "network-instance": "default",
                "service": mpls.service,
                "label-count": mpls.label_count,
                "label-range-min": mpls.label_min,
                "label-range-max": mpls.label_max,
                "tunnels": mpls.tunnels,
                "tunnels-up": mpls.tunnels_up
            }),
        )
    }

    fn congestion(&self, iface: &InterfaceEntry) -> Value {
        keyed(
            DataType::Congestion,
            json!({
                "interface": iface.name,
                "queue-id": 0,
                "dropped-packets": iface.congestion_drops
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fib_synchronized_is_text() {
        let vrf = VrfEntry {
            vrf_name: "default".to_string(),
            route_count: 10,
            bgp_routes: 5,
            ospf_routes: 2,
            static_routes: 1,
            connected_routes: 2,
            ecmp_routes: 1,
            ecmp_groups: 1,
            fib_synced: false,
        };
        let value = JuniperFormatter.fib(&vrf, 10);
        let body = &value[subscription_path(Vendor::Juniper, DataType::Fib)];
        assert_eq!(body["synchronized"], "false");
        assert_eq!(body["route-entries"], 10);
    }
}
