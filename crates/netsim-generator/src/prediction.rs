//! Optical module remaining-life predictions.

use chrono::{Duration, NaiveDateTime};
use netsim_core::random::{pick, round_to, uniform};
use netsim_core::time::{format_timestamp, DATE_FORMAT};
use netsim_core::vocab::{interfaces, switches};
use netsim_core::{ColumnDef, ModuleId, Row, TableSchema, TelemetryRecord, TimeWindow};
use rand::Rng;

/// One life prediction for one module.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub timestamp: NaiveDateTime,
    pub module_id: ModuleId,
    /// 30..=1000
    pub predicted_remaining_days: i64,
    /// 0.001..=0.8, four decimals
    pub failure_probability: f64,
}

impl PredictionRecord {
    pub fn predicted_date(&self) -> NaiveDateTime {
        self.timestamp + Duration::days(self.predicted_remaining_days)
    }
}

impl TelemetryRecord for PredictionRecord {
    fn table_schema() -> TableSchema {
        TableSchema::new(
            "life_predictions",
            vec![
                ColumnDef::utf8("timestamp"),
                ColumnDef::utf8("module_id"),
                ColumnDef::utf8("vendor"),
                ColumnDef::utf8("speed"),
                ColumnDef::utf8("datacenter"),
                ColumnDef::utf8("pod"),
                ColumnDef::utf8("rack"),
                ColumnDef::utf8("device"),
                ColumnDef::utf8("interface"),
                ColumnDef::int64("predicted_remaining_days"),
                ColumnDef::float64("failure_probability"),
                ColumnDef::utf8("predicted_date"),
            ],
        )
    }

    fn to_row(&self) -> Row {
        let id = &self.module_id;
        Row::new()
            .with("timestamp", format_timestamp(self.timestamp))
            .with("module_id", id.to_string())
            .with("vendor", id.vendor.as_str())
            .with("speed", id.speed.as_str())
            .with("datacenter", id.datacenter.as_str())
            .with("pod", id.pod.as_str())
            .with("rack", id.rack.as_str())
            .with("device", id.device.as_str())
            .with("interface", id.interface.as_str())
            .with("predicted_remaining_days", self.predicted_remaining_days)
            .with("failure_probability", self.failure_probability)
            .with(
                "predicted_date",
                self.predicted_date().format(DATE_FORMAT).to_string(),
            )
    }
}

pub fn generate_predictions<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    window: &TimeWindow,
) -> Vec<PredictionRecord> {
    let switches = switches();
    let interfaces = interfaces();
    (0..count)
        .map(|_| {
            let device = pick(rng, &switches);
            let interface = pick(rng, &interfaces);
            PredictionRecord {
                module_id: ModuleId::random_for_port(rng, device, interface),
                predicted_remaining_days: rng.gen_range(30..=1000),
                failure_probability: round_to(uniform(rng, 0.001, 0.8), 4),
                timestamp: window.random_instant(rng),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_predictions_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = TimeWindow::from_dates("2025-03-01", "2025-04-01").unwrap();
        let records = generate_predictions(&mut rng, 500, &window);
        assert_eq!(records.len(), 500);
        for record in &records {
            assert!((30..=1000).contains(&record.predicted_remaining_days));
            assert!((0.001..=0.8).contains(&record.failure_probability));
            assert_eq!(record.failure_probability, round_to(record.failure_probability, 4));
            assert!(record.timestamp >= window.start() && record.timestamp <= window.end());
            assert_eq!(
                (record.predicted_date() - record.timestamp).num_days(),
                record.predicted_remaining_days
            );
            assert!(record.module_id.device.starts_with("SW"));
        }
    }

    #[test]
    fn test_predicted_date_column_is_a_date() {
        let record = PredictionRecord {
            timestamp: netsim_core::time::parse_timestamp("2025-03-10 08:30:00").unwrap(),
            module_id: "Finisar-DC2-Pod03-Rack01-SW04-Eth2/7-400G".parse().unwrap(),
            predicted_remaining_days: 30,
            failure_probability: 0.25,
        };
        let row = record.to_row();
        assert_eq!(row.get("predicted_date").unwrap().as_str(), Some("2025-04-09"));
        assert_eq!(row.get("rack").unwrap().as_str(), Some("Rack01"));
    }
}
