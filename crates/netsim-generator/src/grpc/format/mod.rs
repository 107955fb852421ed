//! Vendor-specific telemetry payloads.
//!
//! Each vendor gets a [`VendorFormatter`] that renders a sampled record the
//! way that vendor's gNMI/gRPC interface would report it. The formatter is
//! picked once per sample from the device's [`Vendor`]; the payload leaves
//! this module as JSON text.

mod arista;
mod cisco;
mod dell;
mod huawei;
mod juniper;
mod openconfig;

pub use arista::AristaFormatter;
pub use cisco::CiscoFormatter;
pub use dell::DellFormatter;
pub use huawei::HuaweiFormatter;
pub use juniper::JuniperFormatter;
pub use openconfig::OpenConfigFormatter;

use super::data_type::DataType;
use super::entities::{InterfaceEntry, MplsEntry, TcamEntry, VrfEntry, VxlanEntry};
use netsim_core::random::round_to;
use netsim_core::Vendor;
use rand::RngCore;
use serde_json::{Map, Value};

/// Payload written when a record cannot be serialized.
pub const FORMAT_ERROR_MARKER: &str = r#"{"error":"Failed to format data"}"#;

/// Default MAC table limit reported when a device does not know its own.
pub const DEFAULT_MAC_CAPACITY: i64 = 100_000;

/// MAC table occupancy of a device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacTableStats {
    pub mac_count: i64,
    pub mac_capacity: i64,
}

impl MacTableStats {
    /// Occupancy in percent, two decimals.
    pub fn utilization_pct(&self) -> f64 {
        percent(self.mac_count as f64, self.mac_capacity as f64)
    }
}

/// The record behind one telemetry sample.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    /// Backs `route_table`, `ecmp` and `fib` samples.
    Vrf(VrfEntry),
    /// Backs `qos` and `congestion` samples.
    Interface(InterfaceEntry),
    Tcam(TcamEntry),
    /// Backs `vxlan` and `vni` samples.
    Vxlan(VxlanEntry),
    Mpls(MplsEntry),
    MacTable(MacTableStats),
}

/// Renders records in one vendor's telemetry schema.
pub trait VendorFormatter {
    fn route_table(&self, vrf: &VrfEntry) -> Value;

    fn ecmp(&self, vrf: &VrfEntry) -> Value;

    /// `fib_size` is the device's hardware forwarding table size.
    fn fib(&self, vrf: &VrfEntry, fib_size: i64) -> Value;

    fn mac_table(&self, mac: &MacTableStats) -> Value;

    /// Some vendors report extra queues that are not tracked per interface;
    /// their counters are drawn from `rng`.
    fn qos(&self, iface: &InterfaceEntry, rng: &mut dyn RngCore) -> Value;

    fn tcam(&self, tcam: &TcamEntry) -> Value;

    /// Shared by `vxlan` and `vni` samples.
    fn vxlan(&self, vni: &VxlanEntry, data_type: DataType) -> Value;

    fn mpls(&self, mpls: &MplsEntry) -> Value;

    fn congestion(&self, iface: &InterfaceEntry) -> Value;
}

/// Formatter for a vendor's dialect. Both SONiC distributions speak OpenConfig.
pub fn formatter_for(vendor: Vendor) -> &'static dyn VendorFormatter {
    match vendor {
        Vendor::Cisco => &CiscoFormatter,
        Vendor::Juniper => &JuniperFormatter,
        Vendor::Arista => &AristaFormatter,
        Vendor::Huawei => &HuaweiFormatter,
        Vendor::Dell => &DellFormatter,
        Vendor::BroadcomSonic | Vendor::CommunitySonic => &OpenConfigFormatter,
    }
}

/// Render `data` as a vendor payload.
///
/// A data type paired with a record of the wrong kind yields `{}`.
pub fn format_value(
    vendor: Vendor,
    data_type: DataType,
    data: &SampleData,
    fib_size: i64,
    rng: &mut dyn RngCore,
) -> Value {
    let formatter = formatter_for(vendor);
    match (data_type, data) {
        (DataType::RouteTable, SampleData::Vrf(vrf)) => formatter.route_table(vrf),
        (DataType::Ecmp, SampleData::Vrf(vrf)) => formatter.ecmp(vrf),
        (DataType::Fib, SampleData::Vrf(vrf)) => formatter.fib(vrf, fib_size),
        (DataType::MacTable, SampleData::MacTable(mac)) => formatter.mac_table(mac),
        (DataType::Qos, SampleData::Interface(iface)) => formatter.qos(iface, rng),
        (DataType::Congestion, SampleData::Interface(iface)) => formatter.congestion(iface),
        (DataType::Tcam, SampleData::Tcam(tcam)) => formatter.tcam(tcam),
        (DataType::Vxlan | DataType::Vni, SampleData::Vxlan(vni)) => {
            formatter.vxlan(vni, data_type)
        }
        (DataType::Mpls, SampleData::Mpls(mpls)) => formatter.mpls(mpls),
        _ => Value::Object(Map::new()),
    }
}

/// Render `data` as a vendor payload in JSON text.
///
/// Always returns a JSON document; serialization failures produce
/// [`FORMAT_ERROR_MARKER`].
pub fn format_payload(
    vendor: Vendor,
    data_type: DataType,
    data: &SampleData,
    fib_size: i64,
    rng: &mut dyn RngCore,
) -> String {
    let value = format_value(vendor, data_type, data, fib_size, rng);
    serde_json::to_string(&value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize {} payload for {}: {}", data_type, vendor, e);
        FORMAT_ERROR_MARKER.to_string()
    })
}

/// `part / whole` in percent with two decimals; a zero `whole` counts as 1.
pub(crate) fn percent(part: f64, whole: f64) -> f64 {
    round_to(part / whole.max(1.0) * 100.0, 2)
}

/// A fraction in percent with two decimals.
pub(crate) fn fraction_pct(fraction: f64) -> f64 {
    round_to(fraction * 100.0, 2)
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn true_false(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}
