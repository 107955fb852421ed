//! Vendor-specific syslog line layouts.

use chrono::NaiveDateTime;
use netsim_core::Vendor;
use rand::Rng;

/// BSD syslog header timestamp, e.g. `Feb 03 14:05:09`.
pub const SYSLOG_TIMESTAMP_FORMAT: &str = "%b %d %H:%M:%S";

/// Fields shared by every line layout.
#[derive(Debug, Clone, Copy)]
pub struct LineFields<'a> {
    pub timestamp: NaiveDateTime,
    pub device: &'a str,
    pub ip: &'a str,
    pub severity: &'a str,
    pub facility: &'a str,
    pub message: &'a str,
}

/// How a vendor lays out a syslog line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// `<ts> <ip> <sev>: <facility>: <msg>`
    Cisco,
    /// `<ts> <ip> <host> <facility>[pid]: <sev>: <msg>`
    Juniper,
    /// `<ts> <ip> %%<sev>/<facility>/<msg>`
    Huawei,
    /// `<ts> <ip> <host>: <facility>: %<sev>-<n>-<facility>: <msg>`
    Arista,
    /// Dell and SONiC, `<ts> <ip> <host> <facility>[pid]: <sev>: <msg>`
    Generic,
}

impl LineStyle {
    pub fn for_vendor(vendor: Vendor) -> Self {
        match vendor {
            Vendor::Cisco => LineStyle::Cisco,
            Vendor::Juniper => LineStyle::Juniper,
            Vendor::Huawei => LineStyle::Huawei,
            Vendor::Arista => LineStyle::Arista,
            Vendor::Dell | Vendor::BroadcomSonic | Vendor::CommunitySonic => LineStyle::Generic,
        }
    }

    /// Render a raw syslog line. Process ids and Arista mnemonic levels are
    /// drawn from `rng`.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R, fields: &LineFields<'_>) -> String {
        let LineFields {
            timestamp,
            device,
            ip,
            severity,
            facility,
            message,
        } = *fields;
        let ts = timestamp.format(SYSLOG_TIMESTAMP_FORMAT);

        match self {
            LineStyle::Cisco => format!("{ts} {ip} {severity}: {facility}: {message}"),
            LineStyle::Juniper => format!(
                "{ts} {ip} {device} {facility}[{}]: {severity}: {message}",
                rng.gen_range(1000..=9999)
            ),
            LineStyle::Huawei => format!("{ts} {ip} %%{severity}/{facility}/{message}"),
            LineStyle::Arista => format!(
                "{ts} {ip} {device}: {facility}: %{severity}-{}-{facility}: {message}",
                rng.gen_range(0..=7)
            ),
            LineStyle::Generic => format!(
                "{ts} {ip} {device} {facility}[{}]: {severity}: {message}",
                rng.gen_range(100..=999)
            ),
        }
    }
}
