//! Vendor gNMI/gRPC subscription paths.

use super::data_type::DataType;
use netsim_core::Vendor;

/// Path reported for vendor/data type names that are not recognised.
pub const UNKNOWN_PATH: &str = "unknown";

const OPENCONFIG_ROUTE_TABLE: &str = "openconfig-network-instance:network-instances/network-instance/protocols/protocol/bgp/rib/ipv4-unicast";
const OPENCONFIG_FIB_SUMMARY: &str =
    "openconfig-network-instance:network-instances/network-instance/fib-summary";
const OPENCONFIG_VNI: &str = "openconfig-vxlan:vxlan/vni";

/// Subscription path a vendor exposes for a data type.
pub fn subscription_path(vendor: Vendor, data_type: DataType) -> &'static str {
    use DataType::*;
    match vendor {
        Vendor::Cisco => match data_type {
            RouteTable => "Cisco-IOS-XR-ip-rib-ipv4-oper:rib/vrfs/vrf/afs/af/safs/saf/ip-rib-route-table-names/ip-rib-route-table-name/protocol/bgp/as/information",
            Ecmp => "Cisco-IOS-XR-fib-common-oper:fib-statistics/nodes/node/drops",
            Fib => "Cisco-IOS-XR-fib-common-oper:fib/nodes/node/protocols/protocol/fib-summaries/fib-summary",
            MacTable => "Cisco-IOS-XR-l2vpn-oper:l2vpn/database/bridge-domain-summary",
            Qos | Congestion => "Cisco-IOS-XR-qos-ma-oper:qos/interface-table/interface/input/statistics",
            Tcam => "Cisco-IOS-XR-asr9k-asic-errors-oper:asic-errors/nodes/node/instances/instance/parity-error",
            Vxlan | Vni => "Cisco-IOS-XR-evpn-oper:evpn/active/evi-detail",
            Mpls => "Cisco-IOS-XR-mpls-ldp-oper:mpls-ldp/nodes/node/bindings-summary",
        },
        Vendor::Juniper => match data_type {
            RouteTable => "/network-instances/network-instance/protocols/protocol/bgp/rib/afi-safis/afi-safi/ipv4-unicast/loc-rib/routes/route",
            Ecmp => "/network-instances/network-instance/fib-state/fib-statistics",
            Fib => "/network-instances/network-instance/fib-state",
            MacTable => "/network-instances/network-instance/fdb/mac-table/entries",
            Qos | Tcam => "/components/component/properties/property/state/value",
            Vxlan => "/network-instances/network-instance/protocols/protocol/bgp/rib/afi-safis/afi-safi/l2vpn-evpn/loc-rib/routes",
            Mpls => "/network-instances/network-instance/mpls/lsps",
            Vni => "/network-instances/network-instance/vlans/vlan/vni",
            Congestion => "/qos/interfaces/interface/output/queues/queue/state/drop-pkts",
        },
        Vendor::Arista => match data_type {
            RouteTable => "eos_native:/show/ip/route/summary",
            Ecmp => "eos_native:/show/platform/fib/multipath/summary",
            Fib => "eos_native:/show/platform/fib/summary",
            MacTable => "eos_native:/show/mac/address-table/count",
            Qos => "eos_native:/show/qos/interfaces",
            Tcam => "eos_native:/show/platform/tcam/utilization",
            Vxlan | Vni => "eos_native:/show/vxlan/vni",
            Mpls => "eos_native:/show/mpls/ldp/binding",
            Congestion => "eos_native:/show/queuing/congestion-drops",
        },
        Vendor::Huawei => match data_type {
            RouteTable => "huawei-routing:routing-entries",
            Ecmp => "huawei-ifm:ifm/interfaces/interface/statistics",
            Fib => "huawei-fib:fib-entries",
            MacTable => "huawei-l2vpn:l2vpn/vsi/mac-table",
            Qos => "huawei-qos:qos/interfaces/interface/statistics",
            Tcam => "huawei-dev:device/tcam-resources",
            Vxlan | Vni => "huawei-vxlan:vxlan/vni-information",
            Mpls => "huawei-mpls:mpls/ldp/bindings",
            Congestion => "huawei-qos:qos/interfaces/interface/statistics/congestion-drops",
        },
        Vendor::Dell => match data_type {
            RouteTable => "dell-route:route-entries/summary",
            Ecmp => "dell-fib:fib/statistics",
            Fib => "dell-fib:fib/summary",
            MacTable => "dell-l2:mac-addresses/summary",
            Qos => "dell-qos:qos/statistics",
            Tcam => "dell-hw:hardware/tcam/utilization",
            Vxlan => "dell-vxlan:vxlan/statistics",
            Mpls => "dell-mpls:mpls/statistics",
            Vni => "dell-vxlan:vxlan/vni",
            Congestion => "dell-qos:qos/congestion/statistics",
        },
        Vendor::BroadcomSonic | Vendor::CommunitySonic => match data_type {
            RouteTable => OPENCONFIG_ROUTE_TABLE,
            Ecmp | Fib => OPENCONFIG_FIB_SUMMARY,
            MacTable => "openconfig-network-instance:network-instances/network-instance/fdb/mac-table",
            Qos => "openconfig-qos:qos/interfaces",
            Tcam => "openconfig-platform:components/component/state",
            Vxlan | Vni => OPENCONFIG_VNI,
            Mpls => "openconfig-mpls:mpls",
            Congestion => "openconfig-qos:qos/interfaces/interface/output-queues/output-queue/state/dropped-pkts",
        },
    }
}

/// Look up a path by vendor and data type names, [`UNKNOWN_PATH`] if either
/// is not recognised.
pub fn subscription_path_by_name(vendor: &str, data_type: &str) -> &'static str {
    match (Vendor::from_name(vendor), data_type.parse::<DataType>()) {
        (Some(vendor), Ok(data_type)) => subscription_path(vendor, data_type),
        _ => UNKNOWN_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combination_has_a_path() {
        for vendor in Vendor::ALL {
            for data_type in DataType::ALL {
                let path = subscription_path(vendor, data_type);
                assert!(!path.is_empty());
                assert_ne!(path, UNKNOWN_PATH);
            }
        }
    }

    #[test]
    fn test_arista_paths_are_eos_native() {
        for data_type in DataType::ALL {
            assert!(subscription_path(Vendor::Arista, data_type).starts_with("eos_native:/"));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(subscription_path_by_name("Aruba", "fib"), UNKNOWN_PATH);
        assert_eq!(subscription_path_by_name("Cisco", "bogus"), UNKNOWN_PATH);
        assert_eq!(
            subscription_path_by_name("community sonic", "vni"),
            OPENCONFIG_VNI
        );
    }
}
