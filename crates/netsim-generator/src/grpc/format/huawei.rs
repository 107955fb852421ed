//! Huawei VRP YANG models.

use super::{fraction_pct, true_false, yes_no, MacTableStats, VendorFormatter};
use crate::grpc::data_type::DataType;
use crate::grpc::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use rand::RngCore;
use serde_json::{json, Value};

pub struct HuaweiFormatter;

impl VendorFormatter for HuaweiFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value {
        json!({
            "huawei-routing:routing-entries": {
                "vrf": vrf.vrf_name,
                "total": vrf.route_count,
                "per-protocol": [
                    {"protocol": "BGP", "count": vrf.bgp_routes},
                    {"protocol": "OSPF", "count": vrf.ospf_routes},
                    {"protocol": "STATIC", "count": vrf.static_routes},
                    {"protocol": "DIRECT", "count": vrf.connected_routes}
                ]
            }
        })
    }

    fn ecmp(&self, vrf: &VrfEntry) -> Value {
        json!({
            "huawei-ifm:ifm/interfaces/interface/statistics": {
                "ecmp-enabled": "true",
                "ecmp-groups": vrf.ecmp_groups,
                "ecmp-routes": vrf.ecmp_routes
            }
        })
    }

    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value {
        json!({
            "huawei-fib:fib-entries": {
                "vrf": vrf.vrf_name,
                "entry-count": fib_size,
                "synced": yes_no(vrf.fib_synced)
            }
        })
    }

    fn mac_table(&self, mac: &MacTableStats) -> Value {
        json!({
            "huawei-l2vpn:l2vpn/vsi/mac-table": {
                "mac-entry-count": mac.mac_count,
                "mac-capacity": mac.mac_capacity,
                "utilization": mac.utilization_pct()
            }
        })
    }

    fn qos(&self, iface: &InterfaceEntry, _rng: &mut dyn RngCore) -> Value {
        json!({
            "huawei-qos:qos/interfaces/interface/statistics": {
                "interface-name": iface.name,
                "qos-enabled": true_false(iface.qos_enabled),
                "queues": [{
                    "queue-id": 0,
                    "max-depth": iface.max_queue_depth.unwrap_or(0),
                    "dropped-packets": iface.max_queue_drops.unwrap_or(0)
                }]
            }
        })
    }

    fn tcam(&self, tcam: &TcamEntry) -> Value {
        json!({
            "huawei-dev:device/tcam-resources": {
                "tcam-resource": tcam.resource,
                "used": tcam.used,
                "total": tcam.capacity,
                "utilization": fraction_pct(tcam.utilization)
            }
        })
    }

    fn vxlan(&self, vni: &VxlanEntry, _data_type: DataType) -> Value {
        json!({
            "huawei-vxlan:vxlan/vni-information": {
                "vni-id": vni.vni_id,
                "vni-type": if vni.is_l2() { "l2-vni" } else { "l3-vni" },
                "vlan-id": vni.vlan_id(),
                "vrf-name": vni.vrf_name(),
                "oper-state": vni.status,
                "mac-count": vni.mac_count().unwrap_or(0),
                "route-count": vni.route_count().unwrap_or(0)
            }
        })
    }

    fn mpls(&self, mpls: &MplsEntry) -> Value {
        json!({
            "huawei-mpls:mpls/ldp/bindings": {
                "service": mpls.service,
                "label-count": mpls.label_count,
                "label-range": {
                    "min": mpls.label_min,
                    "max": mpls.label_max
                },
                "tunnels": mpls.tunnels,
                "tunnels-up": mpls.tunnels_up
            }
        })
    }

    fn congestion(&self, iface: &InterfaceEntry) -> Value {
        json!({
            "huawei-qos:qos/interfaces/interface/statistics/congestion-drops": {
                "interface-name": iface.name,
                "dropped-packets": iface.congestion_drops
            }
        })
    }
}
