//! Syslog event stream.
//!
//! A [`SyslogContext`] holds every device with its optics and L3
//! configuration. Events are spaced evenly across the time window, each one
//! raised by a random device, rendered in that vendor's line layout and
//! tagged with the optical module it concerns when one can be recovered
//! from the message.

pub mod context;
pub mod events;
pub mod format;

pub use context::{L3Config, SyslogContext, SyslogDevice, SyslogOptic, MAX_SYSLOG_DEVICES};
pub use events::{generate_message, EventCategory, EventMessage};
pub use format::{LineFields, LineStyle, SYSLOG_TIMESTAMP_FORMAT};

use crate::error::GeneratorError;
use chrono::NaiveDateTime;
use netsim_core::correlate::correlate_module_id;
use netsim_core::random::pick;
use netsim_core::time::format_timestamp;
use netsim_core::vocab::{SYSLOG_FACILITIES, SYSLOG_SEVERITIES};
use netsim_core::{ColumnDef, ModuleId, Row, TableSchema, TelemetryRecord, TimeWindow, Vendor};
use rand::Rng;

/// One syslog event.
#[derive(Debug, Clone, PartialEq)]
pub struct SyslogRecord {
    pub timestamp: NaiveDateTime,
    pub device: String,
    pub ip: String,
    pub vendor: Vendor,
    pub severity: &'static str,
    pub facility: &'static str,
    pub category: EventCategory,
    pub message: String,
    pub raw_log: String,
    /// Module the event concerns. Always `None` for protocol events.
    pub module_id: Option<ModuleId>,
}

impl TelemetryRecord for SyslogRecord {
    fn table_schema() -> TableSchema {
        TableSchema::new(
            "syslog_events",
            vec![
                ColumnDef::utf8("timestamp"),
                ColumnDef::utf8("device"),
                ColumnDef::utf8("ip"),
                ColumnDef::utf8("vendor"),
                ColumnDef::utf8("severity"),
                ColumnDef::utf8("facility"),
                ColumnDef::utf8("event_category"),
                ColumnDef::utf8("message"),
                ColumnDef::utf8("raw_log"),
                ColumnDef::utf8("module_id"),
            ],
        )
    }

    fn to_row(&self) -> Row {
        Row::new()
            .with("timestamp", format_timestamp(self.timestamp))
            .with("device", self.device.as_str())
            .with("ip", self.ip.as_str())
            .with("vendor", self.vendor.as_str())
            .with("severity", self.severity)
            .with("facility", self.facility)
            .with("event_category", self.category.as_str())
            .with("message", self.message.as_str())
            .with("raw_log", self.raw_log.as_str())
            .with("module_id", self.module_id.as_ref().map(ToString::to_string))
    }
}

/// Emits events evenly spaced over a window.
pub struct SyslogSampler<'a> {
    context: &'a SyslogContext,
    window: TimeWindow,
}

impl<'a> SyslogSampler<'a> {
    pub fn new(context: &'a SyslogContext, window: TimeWindow) -> Result<Self, GeneratorError> {
        if context.devices.is_empty() {
            return Err(GeneratorError::NoDevices);
        }
        Ok(Self { context, window })
    }

    /// The `index`-th of `count` events.
    pub fn event<R: Rng + ?Sized>(&self, rng: &mut R, index: u64, count: u64) -> SyslogRecord {
        let timestamp = self.window.evenly_spaced(index, count);
        let device = pick(rng, &self.context.devices);
        let severity = *pick(rng, SYSLOG_SEVERITIES);
        let facility = *pick(rng, SYSLOG_FACILITIES);
        let message = generate_message(rng, device);

        let ip = device.identity.ip.to_string();
        let vendor = device.identity.vendor;
        let raw_log = LineStyle::for_vendor(vendor).render(
            rng,
            &LineFields {
                timestamp,
                device: device.name(),
                ip: &ip,
                severity,
                facility,
                message: &message.text,
            },
        );

        let module_id = match message.category {
            EventCategory::L3Protocol => None,
            _ => correlate_module_id(rng, &message.text, device.name()),
        };

        SyslogRecord {
            timestamp,
            device: device.name().to_string(),
            ip,
            vendor,
            severity,
            facility,
            category: message.category,
            message: message.text,
            raw_log,
            module_id,
        }
    }

    pub fn events<R: Rng + ?Sized>(&self, rng: &mut R, count: u64) -> Vec<SyslogRecord> {
        (0..count).map(|i| self.event(rng, i, count)).collect()
    }
}
