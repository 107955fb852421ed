//! Event vocabularies and message text.

use super::context::{SyslogDevice, SyslogOptic};
use netsim_core::random::{pick, random_ten_net_ip, uniform};
use netsim_core::vocab::L3_PROTOCOLS;
use rand::Rng;

const PHYSICAL_PORT_EVENTS: &[&str] = &[
    "Link down",
    "Link up",
    "Interface disabled",
    "Interface enabled",
    "Auto-negotiation failed",
    "CRC errors detected",
    "FCS errors detected",
    "Packet drop detected",
    "Port flapping detected",
    "Input errors",
    "Output errors",
    "Collision detected",
    "Excessive collisions",
    "Late collision",
    "Speed mismatch",
    "Duplex mismatch",
];

const OPTICAL_MODULE_EVENTS: &[&str] = &[
    "Rx power high",
    "Rx power low",
    "Tx power high",
    "Tx power low",
    "Temperature high",
    "Temperature low",
    "Voltage high",
    "Voltage low",
    "Bias current high",
    "Bias current low",
    "Module inserted",
    "Module removed",
    "Module not compatible",
    "Module authentication failed",
    "DDM threshold crossed",
];

/// Events a protocol can log. Unknown protocols only log state changes.
fn protocol_events(protocol: &str) -> &'static [&'static str] {
    match protocol {
        "OSPF" => &[
            "Neighbor up",
            "Neighbor down",
            "Adjacency change",
            "SPF calculation",
            "Interface state change",
            "Area border router change",
            "Authentication failure",
            "Packet received with bad checksum",
            "Virtual link state change",
            "DR/BDR election",
        ],
        "BGP" => &[
            "Peer up",
            "Peer down",
            "Prefix limit exceeded",
            "Route dampening",
            "Path attribute error",
            "Session reset",
            "Hold timer expired",
            "Authentication failure",
            "Route flap",
            "Notification received",
        ],
        "VXLAN" => &[
            "VTEP discovery",
            "VNI state change",
            "Duplicate IP detected",
            "ARP/ND suppression",
            "Flood list change",
            "Tunnel established",
            "Tunnel down",
            "MAC mobility detected",
            "Unknown VNI",
            "MTU issues",
        ],
        "MPLS" => &[
            "LDP session up",
            "LDP session down",
            "Label allocation failure",
            "LSP up",
            "LSP down",
            "Path switch",
            "Label space exhausted",
            "TTL expired in transit",
            "RSVP reservation failure",
            "Unreachable destination",
        ],
        "LLDP" => &[
            "Neighbor added",
            "Neighbor removed",
            "Neighbor information changed",
            "Chassis ID TLV missing",
            "Port ID TLV missing",
            "TTL expired",
            "Unrecognized TLV received",
            "Remote port shutdown",
            "Remote system name change",
            "Management address changed",
        ],
        "STP" => &[
            "Topology change",
            "Root bridge change",
            "Port state change",
            "BPDU guard triggered",
            "Root guard triggered",
            "Loop guard triggered",
            "Bridge ID change",
            "Path cost change",
            "Multiple roots detected",
            "Inconsistent port state",
        ],
        "LACP" => &[
            "Port added to port-channel",
            "Port removed from port-channel",
            "Bundle up",
            "Bundle down",
            "Peer timeout",
            "System ID changed",
            "Port priority changed",
            "Key mismatch",
            "LACP rate changed",
            "Individual/Aggregate state change",
        ],
        "PIM" => &[
            "Neighbor up",
            "Neighbor down",
            "Join/Prune received",
            "Assert received",
            "Register stop received",
            "RP changed",
            "RPF change",
            "Multicast state timeout",
            "Bootstrap message received",
            "DR election",
        ],
        "ISIS" => &[
            "Adjacency up",
            "Adjacency down",
            "LSP received",
            "LSP generated",
            "DIS election",
            "Area address mismatch",
            "Authentication failure",
            "LSP database overload",
            "Circuit state change",
            "SPF calculation",
        ],
        "VRRP" => &[
            "State transition",
            "Virtual IP conflict",
            "Authentication failure",
            "Advertisement timer expired",
            "Priority zero received",
            "Master down interval expired",
            "Protocol error",
            "Interface tracking state change",
            "Master/Backup transition",
            "Configuration error",
        ],
        _ => &["State change"],
    }
}

/// What part of the device an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    PhysicalPort,
    OpticalModule,
    L3Protocol,
}

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [
        EventCategory::PhysicalPort,
        EventCategory::OpticalModule,
        EventCategory::L3Protocol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::PhysicalPort => "physical_port",
            EventCategory::OpticalModule => "optical_module",
            EventCategory::L3Protocol => "l3_protocol",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message body of one event, before the vendor header is added.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMessage {
    /// Category actually logged. Optical events on a device without optics
    /// degrade to port events.
    pub category: EventCategory,
    pub text: String,
}

/// Draw a random event for `device`.
pub fn generate_message<R: Rng + ?Sized>(rng: &mut R, device: &SyslogDevice) -> EventMessage {
    match *pick(rng, &EventCategory::ALL) {
        EventCategory::OpticalModule if !device.optics.is_empty() => {
            let optic = pick(rng, &device.optics);
            optical_message(rng, device.name(), optic)
        }
        EventCategory::L3Protocol => l3_message(rng, device),
        _ => port_message(rng, device.name()),
    }
}

fn port_message<R: Rng + ?Sized>(rng: &mut R, device: &str) -> EventMessage {
    let port = format!("Ethernet{}/{}", rng.gen_range(1..=8), rng.gen_range(1..=48));
    let event = *pick(rng, PHYSICAL_PORT_EVENTS);
    let mut text = format!("{device}: {port}: {event}");

    if event.contains("CRC") {
        text.push_str(&format!(", count: {}", rng.gen_range(1..=1000)));
    } else if event.contains("FCS") {
        text.push_str(&format!(", errors: {}", rng.gen_range(1..=500)));
    } else if event.contains("drop") {
        text.push_str(&format!(
            ", drops: {}, duration: {}s",
            rng.gen_range(1..=10_000),
            rng.gen_range(1..=60)
        ));
    }

    EventMessage {
        category: EventCategory::PhysicalPort,
        text,
    }
}

fn optical_message<R: Rng + ?Sized>(rng: &mut R, device: &str, optic: &SyslogOptic) -> EventMessage {
    let event = *pick(rng, OPTICAL_MODULE_EVENTS);
    let mut text = format!(
        "{device}: {}: {} transceiver ({}): {event}",
        optic.port,
        optic.speed(),
        optic.module_id
    );

    let high = event.ends_with("high");
    if event.contains("power") {
        let (value, threshold) = if high {
            (uniform(rng, 2.0, 5.0), uniform(rng, 1.5, 3.0))
        } else {
            (uniform(rng, -35.0, -20.0), uniform(rng, -18.0, -15.0))
        };
        text.push_str(&format!(", value: {value:.2} dBm, threshold: {threshold:.2} dBm"));
    } else if event.starts_with("Temperature") {
        let (value, threshold) = if high {
            (uniform(rng, 70.0, 85.0), uniform(rng, 65.0, 75.0))
        } else {
            (uniform(rng, -20.0, -5.0), uniform(rng, -15.0, -5.0))
        };
        text.push_str(&format!(", value: {value:.1}°C, threshold: {threshold:.1}°C"));
    }

    EventMessage {
        category: EventCategory::OpticalModule,
        text,
    }
}

fn l3_message<R: Rng + ?Sized>(rng: &mut R, device: &SyslogDevice) -> EventMessage {
    let protocol = *pick(rng, L3_PROTOCOLS);
    let event = *pick(rng, protocol_events(protocol));
    let name = device.name();
    let l3 = &device.l3;

    let text = match (protocol, l3.ospf_area, l3.bgp_as) {
        ("OSPF", Some(area), _) => format!(
            "{name}: {protocol}: {event}: area {area}, neighbor {}",
            random_ten_net_ip(rng)
        ),
        ("BGP", _, Some(local_as)) => {
            // Peers sit in a different AS than the device.
            let peer_as = loop {
                let candidate = rng.gen_range(1000..=65_000);
                if candidate != local_as {
                    break candidate;
                }
            };
            format!(
                "{name}: {protocol}: {event}: peer {} (AS {peer_as})",
                random_ten_net_ip(rng)
            )
        }
        ("VXLAN", _, _) if l3.has_vxlan() => {
            format!("{name}: {protocol}: {event}: VNI {}", pick(rng, &l3.vxlan_vnis))
        }
        ("MPLS", _, _) if l3.has_mpls() => {
            format!("{name}: {protocol}: {event}: label {}", pick(rng, &l3.mpls_labels))
        }
        _ => format!("{name}: {protocol}: {event}"),
    };

    EventMessage {
        category: EventCategory::L3Protocol,
        text,
    }
}
