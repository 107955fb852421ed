use crate::common::{assert_module_ids, common_args, topology, window, SEED};
use netsim::{run_syslog, SyslogArgs};
use netsim_generator::syslog::EventCategory;
use netsim_parquet::ParquetContents;
use tempfile::TempDir;

#[test]
fn test_syslog_events_and_module_ids() {
    let temp_dir = TempDir::new().unwrap();
    let args = SyslogArgs {
        common: common_args(2000, &temp_dir.path().join("syslog.parquet"), SEED),
        window: window("2025-02-01", "2025-02-02"),
        topology: topology("isp", 30),
    };
    let summary = run_syslog(&args).unwrap();
    assert_eq!(summary.rows, 2000);
    assert!(summary.unique_devices <= 30);

    let contents = ParquetContents::read(&summary.output).unwrap();
    assert_eq!(contents.num_rows(), 2000);

    let categories = contents.string_column("event_category").unwrap();
    let module_ids = contents.string_column("module_id").unwrap();
    assert_module_ids(&module_ids);

    let l3 = EventCategory::L3Protocol.as_str();
    for (category, module_id) in categories.iter().zip(&module_ids) {
        if category.as_deref() == Some(l3) {
            assert_eq!(module_id.as_deref(), Some(""));
        }
    }

    // Timestamps are evenly spaced, so the file is in time order.
    let timestamps: Vec<String> = contents
        .string_column("timestamp")
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_syslog_seeds_change_values_not_columns() {
    let temp_dir = TempDir::new().unwrap();
    let run = |seed: u64| {
        let args = SyslogArgs {
            common: common_args(50, &temp_dir.path().join(format!("syslog-{seed}.parquet")), seed),
            window: window("2025-02-01", "2025-02-02"),
            topology: topology("datacenter", 20),
        };
        ParquetContents::read(run_syslog(&args).unwrap().output).unwrap()
    };
    let a = run(1);
    let b = run(2);
    assert_eq!(a.column_names(), b.column_names());
    assert_ne!(a.string_column("device"), b.string_column("device"));
}
