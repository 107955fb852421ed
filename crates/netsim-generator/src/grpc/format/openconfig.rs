//! OpenConfig models as served by SONiC's gNMI server.

use super::{fraction_pct, MacTableStats, VendorFormatter};
use crate::grpc::data_type::DataType;
use crate::grpc::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use rand::RngCore;
use serde_json::{json, Value};

pub struct OpenConfigFormatter;

/// Wrap `members` in a `network-instance` list entry named `name`.
fn network_instance(name: &str, members: Value) -> Value {
    let mut instance = json!({
        "name": name,
        "state": { "name": name }
    });
    if let (Some(object), Value::Object(members)) = (instance.as_object_mut(), members) {
        object.extend(members);
    }
    json!({
        "openconfig-network-instance:network-instances": {
            "network-instance": [instance]
        }
    })
}

fn queue_interface(name: &str, queue: Value) -> Value {
    json!({
        "openconfig-qos:qos": {
            "interfaces": {
                "interface": [{
                    "interface-id": name,
                    "output": {
                        "queues": {
                            "queue": [queue]
                        }
                    }
                }]
            }
        }
    })
}

impl VendorFormatter for OpenConfigFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value {
        network_instance(
            &vrf.vrf_name,
            json!({
                "protocols": {
                    "protocol": [{
                        "identifier": "BGP",
                        "name": "bgp",
                        "bgp": {
                            "rib": {
                                "afi-safis": {
                                    "afi-safi": [{
                                        "afi-safi-name": "IPV4_UNICAST",
                                        "ipv4-unicast": {
                                            "loc-rib": {
                                                "state": {
                                                    "num-routes": vrf.bgp_routes
                                                }
                                            }
                                        }
                                    }]
                                }
                            }
                        }
                    }]
                },
                "afts": {
                    "state": {
                        "total-routes": vrf.route_count,
                        "ospf-routes": vrf.ospf_routes,
                        "static-routes": vrf.static_routes,
                        "connected-routes": vrf.connected_routes
                    }
                }
            }),
        )
    }

    fn ecmp(&self, vrf: &VrfEntry) -> Value {
        network_instance(
            &vrf.vrf_name,
            json!({
                "fib-summary": {
                    "state": {
                        "ecmp-routes": vrf.ecmp_routes,
                        "ecmp-groups": vrf.ecmp_groups
                    }
                }
            }),
        )
    }

    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value {
        network_instance(
            &vrf.vrf_name,
            json!({
                "fib-summary": {
                    "state": {
                        "total-entries": fib_size,
                        "hardware-synced": vrf.fib_synced
                    }
                }
            }),
        )
    }

    fn mac_table(&self, mac: &MacTableStats) -> Value {
        network_instance(
            "default",
            json!({
                "fdb": {
                    "mac-table": {
                        "state": {
                            "entries": mac.mac_count,
                            "max-entries": mac.mac_capacity,
                            "utilization": mac.utilization_pct()
                        }
                    }
                }
            }),
        )
    }

    fn qos(&self, iface: &InterfaceEntry, _rng: &mut dyn RngCore) -> Value {
        queue_interface(
            &iface.name,
            json!({
                "name": "0",
                "state": {
                    "name": "0",
                    "max-queue-len": iface.max_queue_depth.unwrap_or(0),
                    "dropped-pkts": iface.max_queue_drops.unwrap_or(0),
                    "qos-enabled": iface.qos_enabled
                }
            }),
        )
    }

    fn tcam(&self, tcam: &TcamEntry) -> Value {
        json!({
            "openconfig-platform:components": {
                "component": [{
                    "name": format!("TCAM-{}", tcam.resource),
                    "state": {
                        "type": "INTEGRATED_CIRCUIT",
                        "used": tcam.used,
                        "free": tcam.capacity - tcam.used,
                        "utilization": fraction_pct(tcam.utilization)
                    }
                }]
            }
        })
    }

    fn vxlan(&self, vni: &VxlanEntry, _data_type: DataType) -> Value {
        json!({
            "openconfig-vxlan:vxlan": {
                "vni-instances": {
                    "vni-instance": [{
                        "vni-id": vni.vni_id,
                        "state": {
                            "vni-id": vni.vni_id,
                            "vni-type": if vni.is_l2() { "L2" } else { "L3" },
                            "bridge-domain": vni.vlan_id(),
                            "vrf-name": vni.vrf_name(),
                            "oper-state": vni.status.to_uppercase(),
                            "mac-count": vni.mac_count().unwrap_or(0),
                            "route-count": vni.route_count().unwrap_or(0),
                            "vtep-count": vni.vtep_count,
                            "source-vtep": vni.local_vtep
                        }
                    }]
                }
            }
        })
    }

    fn mpls(&self, mpls: &MplsEntry) -> Value {
        json!({
            "openconfig-mpls:mpls": {
                "global": {
                    "reserved-label-blocks": {
                        "reserved-label-block": [{
                            "local-id": mpls.service,
                            "state": {
                                "lower-bound": mpls.label_min,
                                "upper-bound": mpls.label_max,
                                "allocated-labels": mpls.label_count
                            }
                        }]
                    }
                },
                "lsps": {
                    "state": {
                        "total": mpls.tunnels,
                        "up": mpls.tunnels_up
                    }
                }
            }
        })
    }

    fn congestion(&self, iface: &InterfaceEntry) -> Value {
        queue_interface(
            &iface.name,
            json!({
                "name": "0",
                "state": {
                    "name": "0",
                    "dropped-pkts": iface.congestion_drops
                }
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_instance_envelope() {
        let vrf = VrfEntry {
            vrf_name: "mgmt".to_string(),
            route_count: 100,
            bgp_routes: 40,
            ospf_routes: 30,
            static_routes: 10,
            connected_routes: 20,
            ecmp_routes: 5,
            ecmp_groups: 12,
            fib_synced: true,
        };
        let value = OpenConfigFormatter.ecmp(&vrf);
        let instance = &value["openconfig-network-instance:network-instances"]["network-instance"][0];
        assert_eq!(instance["name"], "mgmt");
        assert_eq!(instance["fib-summary"]["state"]["ecmp-groups"], 12);
        assert!(instance.get("body").is_none());
    }
}
