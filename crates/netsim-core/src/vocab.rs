//! Fixed vocabularies the generators sample from.
//!
//! These tables are pure data. Anything that needs to pick a value from one
//! of them should go through [`crate::random::pick`] so an empty table can
//! never be reached at runtime.

/// Optical transceiver manufacturers.
pub const OPTICAL_VENDORS: &[&str] = &[
    "Innolight",
    "Luxshare",
    "Finisar",
    "HGTECH",
    "Eoptolink",
    "Accelink",
];

/// Port speeds, slowest first.
pub const SPEEDS: &[&str] = &["1G", "10G", "25G", "100G", "200G", "400G", "800G"];

pub const DATACENTERS: &[&str] = &["DC1", "DC2", "DC3"];

pub const PODS: &[&str] = &["Pod01", "Pod02", "Pod03", "Pod04"];

pub const RACKS: &[&str] = &["Rack01", "Rack02", "Rack03", "Rack04", "Rack05"];

/// Optical module form factors appended to part numbers.
pub const OPTIC_TYPES: &[&str] = &["SR", "LR", "PSM4", "CWDM4", "LR4", "SR4", "AOC", "DAC"];

pub const VRF_NAMES: &[&str] = &["default", "mgmt", "customer1", "customer2", "core", "services"];

pub const QOS_QUEUES: &[&str] = &[
    "priority",
    "control-plane",
    "best-effort",
    "scavenger",
    "video",
    "voice",
];

pub const CONGESTION_ALGORITHMS: &[&str] = &["tail-drop", "WRED", "ECN", "PFC"];

pub const MPLS_SERVICES: &[&str] = &["LDP", "RSVP-TE", "SR-MPLS", "L3VPN", "L2VPN", "VPLS", "EVPN"];

pub const VXLAN_PROTOCOLS: &[&str] = &["BGP-EVPN", "Multicast", "Ingress-Replication"];

pub const ECMP_LOAD_BALANCE: &[&str] = &["per-packet", "per-flow", "5-tuple", "src-ip", "dst-ip"];

/// Hardware resources tracked in TCAM, one record per resource per device.
pub const TCAM_RESOURCES: &[&str] = &[
    "ACL",
    "QoS",
    "LPM",
    "FIB",
    "Host",
    "Route",
    "MPLS",
    "PBR",
    "NAT",
    "Tunnel",
    "VLAN",
    "MAC",
    "L3 Interface",
];

pub const SYSLOG_FACILITIES: &[&str] = &[
    "kern", "user", "mail", "daemon", "auth", "syslog", "lpr", "news", "uucp", "cron", "authpriv",
    "ftp", "local0", "local1", "local2", "local3", "local4", "local5", "local6", "local7",
];

pub const SYSLOG_SEVERITIES: &[&str] = &[
    "emerg", "alert", "crit", "err", "warning", "notice", "info", "debug",
];

pub const L3_PROTOCOLS: &[&str] = &[
    "OSPF", "BGP", "VXLAN", "MPLS", "LLDP", "STP", "LACP", "PIM", "ISIS", "VRRP",
];

/// IF-MIB `ifType` values.
pub const INTERFACE_TYPES: &[&str] = &[
    "ethernetCsmacd",
    "softwareLoopback",
    "other",
    "propVirtual",
    "propPointToPointSerial",
];

/// IF-MIB `ifAdminStatus` values.
pub const ADMIN_STATES: &[&str] = &["up", "down", "testing"];

/// IF-MIB `ifOperStatus` values.
pub const OPER_STATES: &[&str] = &[
    "up",
    "down",
    "testing",
    "unknown",
    "dormant",
    "notPresent",
    "lowerLayerDown",
];

/// Network operating systems quoted in SNMP `sysDescr`.
pub const OS_NAMES: &[&str] = &["NX-OS", "IOS-XR", "IOS", "EOS", "JunOS", "VRP"];

/// Peer roles used in interface aliases.
pub const PEER_ROLES: &[&str] = &["spine", "leaf", "core", "border"];

/// Characters used for optical serial numbers.
pub const SERIAL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Switch hostnames `SW01`..`SW20` used by the DDM and prediction datasets.
pub fn switches() -> Vec<String> {
    (1..=20).map(|i| format!("SW{i:02}")).collect()
}

/// Interface names `Eth1/1`..`Eth8/8`.
pub fn interfaces() -> Vec<String> {
    (1..=8)
        .flat_map(|slot| (1..=8).map(move |port| format!("Eth{slot}/{port}")))
        .collect()
}

/// Line rate in bits per second for a speed label, as reported by `ifSpeed`.
///
/// Unknown labels map to 0.
pub fn speed_to_bps(speed: &str) -> i64 {
    match speed {
        "1G" => 1_000_000_000,
        "10G" => 10_000_000_000,
        "25G" => 25_000_000_000,
        "100G" => 100_000_000_000,
        "200G" => 200_000_000_000,
        "400G" => 400_000_000_000,
        "800G" => 800_000_000_000,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_and_interfaces() {
        let switches = switches();
        assert_eq!(switches.len(), 20);
        assert_eq!(switches[0], "SW01");
        assert_eq!(switches[19], "SW20");

        let interfaces = interfaces();
        assert_eq!(interfaces.len(), 64);
        assert_eq!(interfaces[0], "Eth1/1");
        assert_eq!(interfaces[63], "Eth8/8");
    }

    #[test]
    fn test_speed_to_bps() {
        for speed in SPEEDS {
            assert!(speed_to_bps(speed) > 0, "missing capacity for {speed}");
        }
        assert_eq!(speed_to_bps("100G"), 100_000_000_000);
        assert_eq!(speed_to_bps("40G"), 0);
    }
}
