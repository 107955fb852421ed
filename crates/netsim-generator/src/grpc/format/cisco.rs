//! Cisco IOS-XR operational models.

use super::{fraction_pct, MacTableStats, VendorFormatter};
use crate::grpc::data_type::DataType;
use crate::grpc::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use rand::RngCore;
use serde_json::{json, Value};

pub struct CiscoFormatter;

impl VendorFormatter for CiscoFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value {
        json!({
            "Cisco-IOS-XR-ip-rib-ipv4-oper:rib": {
                "vrfs": {
                    "vrf": [{
                        "vrf-name": vrf.vrf_name,
                        "routes-summary": {
                            "protocol-total-routes": [
                                {"protocol-name": "bgp", "routes": vrf.bgp_routes},
                                {"protocol-name": "ospf", "routes": vrf.ospf_routes},
                                {"protocol-name": "static", "routes": vrf.static_routes},
                                {"protocol-name": "connected", "routes": vrf.connected_routes}
                            ],
                            "total-routes": vrf.route_count
                        }
                    }]
                }
            }
        })
    }

    fn ecmp(&self, vrf: &VrfEntry) -> Value {
        json!({
            "Cisco-IOS-XR-fib-common-oper:fib-statistics": {
                "nodes": {
                    "node": [{
                        "drops": {
                            "drop-type": "ECMP",
                            "number-of-paths": vrf.ecmp_routes,
                            "number-of-groups": vrf.ecmp_groups
                        }
                    }]
                }
            }
        })
    }

    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value {
        json!({
            "Cisco-IOS-XR-fib-common-oper:fib": {
                "nodes": {
                    "node": [{
                        "protocols": {
                            "protocol": [{
                                "protocol-name": "IPv4",
                                "fib-summary": {
                                    "total-routes": fib_size,
                                    "hardware-synced": vrf.fib_synced
                                }
                            }]
                        }
                    }]
                }
            }
        })
    }

    fn mac_table(&self, mac: &MacTableStats) -> Value {
        json!({
            "Cisco-IOS-XR-l2vpn-oper:l2vpn": {
                "database": {
                    "bridge-domain-summary": {
                        "mac-entries": mac.mac_count,
                        "mac-limit": mac.mac_capacity,
                        "mac-limit-percentage": mac.utilization_pct()
                    }
                }
            }
        })
    }

    fn qos(&self, iface: &InterfaceEntry, _rng: &mut dyn RngCore) -> Value {
        json!({
            "Cisco-IOS-XR-qos-ma-oper:qos": {
                "interface-table": {
                    "interface": [{
                        "interface-name": iface.name,
                        "input": {
                            "statistics": {
                                "queue": [{
                                    "queue-id": 0,
                                    "queue-max-depth": iface.max_queue_depth.unwrap_or(0),
                                    "queue-max-drop": iface.max_queue_drops.unwrap_or(0)
                                }]
                            }
                        }
                    }]
                }
            }
        })
    }

    fn tcam(&self, tcam: &TcamEntry) -> Value {
        json!({
            "Cisco-IOS-XR-asr9k-asic-errors-oper:asic-errors": {
                "nodes": {
                    "node": [{
                        "instances": {
                            "instance": [{
                                "parity-error": {
                                    "tcam-info": {
                                        "resource": tcam.resource,
                                        "used": tcam.used,
                                        "available": tcam.capacity - tcam.used,
                                        "utilization": fraction_pct(tcam.utilization)
                                    }
                                }
                            }]
                        }
                    }]
                }
            }
        })
    }

    fn vxlan(&self, vni: &VxlanEntry, _data_type: DataType) -> Value {
        json!({
            "Cisco-IOS-XR-evpn-oper:evpn": {
                "active": {
                    "evi-detail": [{
                        "evi": vni.vni_id,
                        "bridge-domain": format!("bridge-domain{}", vni.vlan_id().unwrap_or(100)),
                        "type": if vni.is_l2() { "L2" } else { "L3" },
                        "state": vni.status,
                        "mac-count": vni.mac_count().unwrap_or(0),
                        "route-count": vni.route_count().unwrap_or(0)
                    }]
                }
            }
        })
    }

    fn mpls(&self, mpls: &MplsEntry) -> Value {
        json!({
            "Cisco-IOS-XR-mpls-ldp-oper:mpls-ldp": {
                "nodes": {
                    "node": [{
                        "bindings-summary": {
                            "service": mpls.service,
                            "label-entries": mpls.label_count,
                            "local-label-min": mpls.label_min,
                            "local-label-max": mpls.label_max,
                            "ldp-tunnels": mpls.tunnels,
                            "ldp-tunnels-up": mpls.tunnels_up
                        }
                    }]
                }
            }
        })
    }

    fn congestion(&self, iface: &InterfaceEntry) -> Value {
        json!({
            "Cisco-IOS-XR-qos-ma-oper:qos": {
                "interface-table": {
                    "interface": [{
                        "interface-name": iface.name,
                        "output": {
                            "statistics": {
                                "queue": [{
                                    "queue-id": 0,
                                    "tail-drops": iface.congestion_drops
                                }]
                            }
                        }
                    }]
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tcam_reports_available_and_percent() {
        let tcam = TcamEntry {
            resource: "ACL".to_string(),
            capacity: 4000,
            used: 3000,
            utilization: 0.75,
        };
        let value = CiscoFormatter.tcam(&tcam);
        let info = &value["Cisco-IOS-XR-asr9k-asic-errors-oper:asic-errors"]["nodes"]["node"][0]
            ["instances"]["instance"][0]["parity-error"]["tcam-info"];
        assert_eq!(info["available"], 1000);
        assert_eq!(info["utilization"], 75.0);
    }
}
