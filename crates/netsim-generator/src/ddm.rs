//! Optical DDM readings with injected faults.
//!
//! Healthy readings are scattered over roughly a week after the base time.
//! A fraction of the modules seen in those readings are then picked (without
//! replacement) to fail: each gets six out-of-range readings five minutes
//! apart starting at the base time.

use crate::error::GeneratorError;
use chrono::{Duration, NaiveDateTime};
use netsim_core::random::{pick, round_to, uniform};
use netsim_core::time::format_timestamp;
use netsim_core::vocab::{interfaces, switches};
use netsim_core::{ColumnDef, ModuleId, Row, TableSchema, TelemetryRecord};
use rand::seq::index;
use rand::Rng;
use tracing::info;

/// Largest offset of a healthy reading after the base time, in minutes.
pub const MAX_OFFSET_MINUTES: i64 = 10_000;

/// Readings emitted per faulty module.
pub const FAULT_READINGS: usize = 6;

/// Minutes between consecutive fault readings.
pub const FAULT_INTERVAL_MINUTES: i64 = 5;

/// Most records reserved before generation starts.
const MAX_RESERVED_RECORDS: usize = 1 << 20;

/// Sensor values of one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DdmValues {
    pub temperature: f64,
    pub voltage: f64,
    pub bias_current: f64,
    pub tx_power: f64,
    pub rx_power: f64,
}

impl DdmValues {
    pub fn healthy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature: round_to(uniform(rng, 30.0, 70.0), 2),
            voltage: round_to(uniform(rng, 3.2, 3.6), 2),
            bias_current: round_to(uniform(rng, 10.0, 80.0), 2),
            tx_power: round_to(uniform(rng, -2.0, 2.0), 2),
            rx_power: round_to(uniform(rng, -4.0, 1.0), 2),
        }
    }

    /// Overheating, under-voltage module with a collapsing laser.
    pub fn faulty<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature: round_to(uniform(rng, 80.0, 85.0), 2),
            voltage: round_to(uniform(rng, 3.0, 3.15), 2),
            bias_current: round_to(uniform(rng, 0.0, 5.0), 2),
            tx_power: round_to(uniform(rng, -7.0, -5.0), 2),
            rx_power: round_to(uniform(rng, -10.0, -8.0), 2),
        }
    }
}

/// One DDM reading of one module.
#[derive(Debug, Clone, PartialEq)]
pub struct DdmRecord {
    pub timestamp: NaiveDateTime,
    pub module_id: ModuleId,
    pub values: DdmValues,
    pub is_fault: bool,
}

impl TelemetryRecord for DdmRecord {
    fn table_schema() -> TableSchema {
        TableSchema::new(
            "ddm_readings",
            vec![
                ColumnDef::utf8("timestamp"),
                ColumnDef::utf8("module_id"),
                ColumnDef::utf8("vendor"),
                ColumnDef::utf8("speed"),
                ColumnDef::float64("temperature"),
                ColumnDef::float64("voltage"),
                ColumnDef::float64("bias_current"),
                ColumnDef::float64("tx_power"),
                ColumnDef::float64("rx_power"),
                ColumnDef::utf8("datacenter"),
                ColumnDef::utf8("pod"),
                ColumnDef::utf8("rack"),
                ColumnDef::utf8("device"),
                ColumnDef::utf8("interface"),
                ColumnDef::bool("is_fault"),
            ],
        )
    }

    fn to_row(&self) -> Row {
        let id = &self.module_id;
        let v = &self.values;
        Row::new()
            .with("timestamp", format_timestamp(self.timestamp))
            .with("module_id", id.to_string())
            .with("vendor", id.vendor.as_str())
            .with("speed", id.speed.as_str())
            .with("temperature", v.temperature)
            .with("voltage", v.voltage)
            .with("bias_current", v.bias_current)
            .with("tx_power", v.tx_power)
            .with("rx_power", v.rx_power)
            .with("datacenter", id.datacenter.as_str())
            .with("pod", id.pod.as_str())
            .with("rack", id.rack.as_str())
            .with("device", id.device.as_str())
            .with("interface", id.interface.as_str())
            .with("is_fault", self.is_fault)
    }
}

/// Number of modules that will be made to fail for a run.
pub fn fault_module_count(count: u64, fault_ratio: f64) -> usize {
    (fault_ratio * count as f64).floor() as usize
}

/// Up-front reservation, capped so huge runs grow as they go.
fn reserved_capacity(healthy_count: usize, fault_count: usize) -> usize {
    healthy_count
        .saturating_add(fault_count.saturating_mul(FAULT_READINGS))
        .min(MAX_RESERVED_RECORDS)
}

/// Healthy readings followed by fault readings.
///
/// Returns `count + 6 * floor(fault_ratio * count)` records.
pub fn generate_ddm<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    fault_ratio: f64,
    base_time: NaiveDateTime,
) -> Result<Vec<DdmRecord>, GeneratorError> {
    if !(0.0..=1.0).contains(&fault_ratio) {
        return Err(GeneratorError::InvalidFaultRatio(fault_ratio));
    }

    let healthy_count =
        usize::try_from(count).map_err(|_| GeneratorError::CountTooLarge(count))?;

    let switches = switches();
    let interfaces = interfaces();
    let fault_count = fault_module_count(count, fault_ratio);
    let mut records = Vec::with_capacity(reserved_capacity(healthy_count, fault_count));

    for _ in 0..count {
        let device = pick(rng, &switches);
        let interface = pick(rng, &interfaces);
        let module_id = ModuleId::random_for_port(rng, device, interface);
        let offset = rng.gen_range(0..=MAX_OFFSET_MINUTES);
        records.push(DdmRecord {
            timestamp: base_time + Duration::minutes(offset),
            module_id,
            values: DdmValues::healthy(rng),
            is_fault: false,
        });
    }

    let faulty: Vec<ModuleId> = index::sample(rng, healthy_count, fault_count)
        .into_iter()
        .map(|i| records[i].module_id.clone())
        .collect();
    for module_id in faulty {
        for step in 0..FAULT_READINGS as i64 {
            records.push(DdmRecord {
                timestamp: base_time + Duration::minutes(step * FAULT_INTERVAL_MINUTES),
                module_id: module_id.clone(),
                values: DdmValues::faulty(rng),
                is_fault: true,
            });
        }
    }

    info!(
        "Generated {} DDM readings ({} faulty modules)",
        records.len(),
        fault_count
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsim_core::time::parse_timestamp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn base_time() -> NaiveDateTime {
        parse_timestamp("2025-03-27 10:00:00").unwrap()
    }

    #[test]
    fn test_row_count_includes_fault_readings() {
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_ddm(&mut rng, 1000, 0.01, base_time()).unwrap();
        assert_eq!(records.len(), 1000 + 6 * 10);
        assert_eq!(records.iter().filter(|r| r.is_fault).count(), 60);
    }

    #[test]
    fn test_faulty_modules_come_from_healthy_readings() {
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_ddm(&mut rng, 500, 0.05, base_time()).unwrap();
        let healthy: HashSet<String> = records
            .iter()
            .filter(|r| !r.is_fault)
            .map(|r| r.module_id.to_string())
            .collect();
        for record in records.iter().filter(|r| r.is_fault) {
            assert!(healthy.contains(&record.module_id.to_string()));
            assert!((80.0..=85.0).contains(&record.values.temperature));
            assert!((0.0..=5.0).contains(&record.values.bias_current));
            let minutes = (record.timestamp - base_time()).num_minutes();
            assert!(minutes % 5 == 0 && minutes <= 25);
        }
    }

    #[test]
    fn test_healthy_values_are_rounded_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for record in generate_ddm(&mut rng, 300, 0.0, base_time()).unwrap() {
            let v = record.values;
            assert!((30.0..=70.0).contains(&v.temperature));
            assert!((3.2..=3.6).contains(&v.voltage));
            assert_eq!(v.temperature, round_to(v.temperature, 2));
            let minutes = (record.timestamp - base_time()).num_minutes();
            assert!((0..=MAX_OFFSET_MINUTES).contains(&minutes));
            assert_eq!(record.module_id.to_string().split('-').count(), 7);
        }
    }

    #[test]
    fn test_reservation_is_capped() {
        assert_eq!(reserved_capacity(1000, 10), 1060);
        assert_eq!(reserved_capacity(usize::MAX, usize::MAX), MAX_RESERVED_RECORDS);
        assert_eq!(
            reserved_capacity(MAX_RESERVED_RECORDS * 4, 0),
            MAX_RESERVED_RECORDS
        );
    }

    #[test]
    fn test_invalid_fault_ratio() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = generate_ddm(&mut rng, 10, 1.5, base_time()).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidFaultRatio(r) if r == 1.5));
    }
}
