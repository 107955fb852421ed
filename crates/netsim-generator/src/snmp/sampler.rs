//! Time-series polling of the simulated interface tables.

use super::device::SnmpDevice;
use super::interface::{IfCounters, OpticalReadings, SnmpInterface};
use crate::error::GeneratorError;
use chrono::NaiveDateTime;
use netsim_core::time::format_timestamp;
use netsim_core::vocab::{DATACENTERS, PODS, RACKS};
use netsim_core::{ColumnDef, Row, TableSchema, TelemetryRecord, TimeWindow};
use rand::Rng;

/// One poll of one interface.
#[derive(Debug, Clone, PartialEq)]
pub struct SnmpSample<'a> {
    pub timestamp: NaiveDateTime,
    pub device: &'a SnmpDevice,
    pub interface: &'a SnmpInterface,
    pub counters: IfCounters,
    pub readings: OpticalReadings,
}

impl TelemetryRecord for SnmpSample<'_> {
    fn table_schema() -> TableSchema {
        TableSchema::new(
            "snmp_samples",
            vec![
                ColumnDef::utf8("timestamp"),
                ColumnDef::utf8("device_ip"),
                ColumnDef::utf8("device_hostname"),
                ColumnDef::utf8("device_vendor"),
                ColumnDef::utf8("interface"),
                ColumnDef::utf8("speed"),
                ColumnDef::utf8("datacenter").backfill_from(DATACENTERS),
                ColumnDef::utf8("room").backfill_from(PODS),
                ColumnDef::utf8("rack").backfill_from(RACKS),
                ColumnDef::utf8("module_id"),
                ColumnDef::utf8("optic_vendor"),
                ColumnDef::utf8("optic_serial"),
                ColumnDef::utf8("optic_part"),
                // SNMPv2-MIB system group
                ColumnDef::utf8("sysDescr"),
                ColumnDef::utf8("sysObjectID"),
                ColumnDef::int64("sysUpTime"),
                ColumnDef::utf8("sysContact"),
                ColumnDef::utf8("sysLocation"),
                ColumnDef::int64("cpu_5s"),
                ColumnDef::int64("cpu_1m"),
                ColumnDef::int64("cpu_5m"),
                ColumnDef::int64("memory_used"),
                ColumnDef::int64("memory_total"),
                // IF-MIB
                ColumnDef::int64("ifIndex"),
                ColumnDef::utf8("ifDescr"),
                ColumnDef::utf8("ifAlias"),
                ColumnDef::utf8("ifType"),
                ColumnDef::int64("ifMtu"),
                ColumnDef::int64("ifSpeed"),
                ColumnDef::utf8("ifAdminStatus"),
                ColumnDef::utf8("ifOperStatus"),
                ColumnDef::int64("ifLastChange"),
                ColumnDef::int64("ifHCInOctets"),
                ColumnDef::int64("ifHCOutOctets"),
                ColumnDef::int64("ifInUcastPkts"),
                ColumnDef::int64("ifOutUcastPkts"),
                ColumnDef::int64("ifInErrors"),
                ColumnDef::int64("ifOutErrors"),
                ColumnDef::int64("ifInDiscards"),
                ColumnDef::int64("ifOutDiscards"),
                ColumnDef::int64("ifInBroadcastPkts"),
                ColumnDef::int64("ifOutBroadcastPkts"),
                ColumnDef::int64("ifInMulticastPkts"),
                ColumnDef::int64("ifOutMulticastPkts"),
                // Optical DDM
                ColumnDef::float64("temperature"),
                ColumnDef::float64("voltage"),
                ColumnDef::float64("bias_current"),
                ColumnDef::float64("tx_power"),
                ColumnDef::float64("rx_power"),
            ],
        )
    }

    fn to_row(&self) -> Row {
        let iface = self.interface;
        let device = self.device;
        let c = &self.counters;
        let r = &self.readings;

        let mut row = Row::new()
            .with("timestamp", format_timestamp(self.timestamp))
            .with("device_ip", iface.device_ip.as_str())
            .with("device_hostname", iface.device_hostname.as_str())
            .with("device_vendor", iface.device_vendor)
            .with("interface", iface.name.as_str())
            .with("speed", iface.speed)
            .with("sysDescr", device.sys_descr.as_str())
            .with("sysObjectID", device.oid_prefix)
            .with("sysUpTime", device.sys_uptime)
            .with("sysContact", device.sys_contact.as_str())
            .with("sysLocation", device.sys_location.as_str())
            .with("cpu_5s", device.cpu_5s)
            .with("cpu_1m", device.cpu_1m)
            .with("cpu_5m", device.cpu_5m)
            .with("memory_used", device.memory_used)
            .with("memory_total", device.memory_total)
            .with("ifIndex", iface.if_index)
            .with("ifDescr", iface.name.as_str())
            .with("ifAlias", iface.alias.as_str())
            .with("ifType", iface.if_type)
            .with("ifMtu", iface.mtu)
            .with("ifSpeed", iface.speed_bps())
            .with("ifAdminStatus", iface.admin_status)
            .with("ifOperStatus", iface.oper_status)
            .with("ifLastChange", iface.last_change)
            .with("ifHCInOctets", c.in_octets)
            .with("ifHCOutOctets", c.out_octets)
            .with("ifInUcastPkts", c.in_ucast_pkts)
            .with("ifOutUcastPkts", c.out_ucast_pkts)
            .with("ifInErrors", c.in_errors)
            .with("ifOutErrors", c.out_errors)
            .with("ifInDiscards", c.in_discards)
            .with("ifOutDiscards", c.out_discards)
            .with("ifInBroadcastPkts", c.in_broadcast_pkts)
            .with("ifOutBroadcastPkts", c.out_broadcast_pkts)
            .with("ifInMulticastPkts", c.in_multicast_pkts)
            .with("ifOutMulticastPkts", c.out_multicast_pkts)
            .with("temperature", r.temperature)
            .with("voltage", r.voltage)
            .with("bias_current", r.bias_current)
            .with("tx_power", r.tx_power)
            .with("rx_power", r.rx_power);

        // Ports without an optic leave location to the backfill and optic
        // inventory empty.
        if let Some(location) = &iface.location {
            row.set("datacenter", location.datacenter.as_str());
            row.set("room", location.room.as_str());
            row.set("rack", location.rack.as_str());
        }
        if let Some(optic) = &iface.optic {
            row.set("module_id", optic.module_id.to_string());
            row.set("optic_vendor", optic.module_id.vendor.as_str());
            row.set("optic_serial", optic.serial.as_str());
            row.set("optic_part", optic.part.as_str());
        }
        row
    }
}

/// Cycles through every interface of an inventory, one poll per sample.
pub struct SnmpSampler<'a> {
    devices: &'a [SnmpDevice],
    interfaces: &'a [SnmpInterface],
    window: TimeWindow,
}

impl<'a> SnmpSampler<'a> {
    pub fn new(
        devices: &'a [SnmpDevice],
        interfaces: &'a [SnmpInterface],
        window: TimeWindow,
    ) -> Result<Self, GeneratorError> {
        if devices.is_empty() || interfaces.is_empty() {
            return Err(GeneratorError::NoDevices);
        }
        Ok(Self {
            devices,
            interfaces,
            window,
        })
    }

    /// Poll the `index`-th interface in round-robin order at a random instant.
    ///
    /// Up interfaces see one interval of traffic; ports with an optic see
    /// one interval of sensor drift.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, index: usize) -> SnmpSample<'a> {
        let interface = &self.interfaces[index % self.interfaces.len()];
        let timestamp = self.window.random_instant(rng);

        let counters = if interface.is_up() {
            interface.counters.advance(rng)
        } else {
            interface.counters
        };
        let readings = if interface.optic.is_some() {
            interface.readings.drift(rng)
        } else {
            interface.readings
        };

        SnmpSample {
            timestamp,
            device: &self.devices[interface.device_index],
            interface,
            counters,
            readings,
        }
    }

    pub fn samples<R: Rng + ?Sized>(&self, rng: &mut R, count: u64) -> Vec<SnmpSample<'a>> {
        (0..count as usize).map(|i| self.sample(rng, i)).collect()
    }
}
