//! Dell Enterprise SONiC / OS10 native models.

use super::{fraction_pct, yes_no, MacTableStats, VendorFormatter};
use crate::grpc::data_type::DataType;
use crate::grpc::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use rand::RngCore;
use serde_json::{json, Value};

pub struct DellFormatter;

impl VendorFormatter for DellFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value {
        json!({
            "dell-route:route-entries/summary": {
                "vrf": vrf.vrf_name,
                "total": vrf.route_count,
                "bgp": vrf.bgp_routes,
                "ospf": vrf.ospf_routes,
                "static": vrf.static_routes,
                "connected": vrf.connected_routes
            }
        })
    }

    fn ecmp(&self, vrf: &VrfEntry) -> Value {
        json!({
            "dell-fib:fib/statistics": {
                "ecmp-routes": vrf.ecmp_routes,
                "ecmp-groups": vrf.ecmp_groups
            }
        })
    }

    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value {
        json!({
            "dell-fib:fib/summary": {
                "vrf": vrf.vrf_name,
                "total-entries": fib_size,
                "synced": yes_no(vrf.fib_synced)
            }
        })
    }

    fn mac_table(&self, mac: &MacTableStats) -> Value {
        let dynamic = (mac.mac_count as f64 * 0.9) as i64;
        json!({
            "dell-l2:mac-addresses/summary": {
                "dynamic": dynamic,
                "static": mac.mac_count - dynamic,
                "total": mac.mac_count,
                "capacity": mac.mac_capacity
            }
        })
    }

    fn qos(&self, iface: &InterfaceEntry, _rng: &mut dyn RngCore) -> Value {
        json!({
            "dell-qos:qos/statistics": {
                "interface": iface.name,
                "queue-stats": [{
                    "queue": 0,
                    "max-depth": iface.max_queue_depth.unwrap_or(0),
                    "dropped": iface.max_queue_drops.unwrap_or(0)
                }]
            }
        })
    }

    fn tcam(&self, tcam: &TcamEntry) -> Value {
        json!({
            "dell-hw:hardware/tcam/utilization": {
                "resource": tcam.resource,
                "used": tcam.used,
                "total": tcam.capacity,
                "utilization-percent": fraction_pct(tcam.utilization)
            }
        })
    }

    fn vxlan(&self, vni: &VxlanEntry, data_type: DataType) -> Value {
        let body = json!({
            "vni-id": vni.vni_id,
            "type": if vni.is_l2() { "l2" } else { "l3" },
            "oper-status": vni.status,
            "vlan-id": vni.vlan_id(),
            "vrf": vni.vrf_name(),
            "mac-count": vni.mac_count().unwrap_or(0),
            "route-count": vni.route_count().unwrap_or(0)
        });
        // Dell splits tunnel statistics and the VNI table into two models.
        match data_type {
            DataType::Vxlan => json!({ "dell-vxlan:vxlan/statistics": body }),
            _ => json!({ "dell-vxlan:vxlan/vni": body }),
        }
    }

    fn mpls(&self, mpls: &MplsEntry) -> Value {
        json!({
            "dell-mpls:mpls/statistics": {
                "service": mpls.service,
                "labels": mpls.label_count,
                "min-label": mpls.label_min,
                "max-label": mpls.label_max,
                "tunnels": mpls.tunnels,
                "active-tunnels": mpls.tunnels_up
            }
        })
    }

    fn congestion(&self, iface: &InterfaceEntry) -> Value {
        json!({
            "dell-qos:qos/congestion/statistics": {
                "interface": iface.name,
                "drops": iface.congestion_drops
            }
        })
    }
}
