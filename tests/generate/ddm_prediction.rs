use crate::common::{assert_module_ids, common_args, window, SEED};
use netsim::{run_ddm, run_prediction, DdmArgs, PredictionArgs};
use netsim_parquet::ParquetContents;
use std::path::Path;
use tempfile::TempDir;

fn ddm_args(output: &Path, count: u64, fault_ratio: f64, seed: u64) -> DdmArgs {
    DdmArgs {
        common: common_args(count, output, seed),
        fault_ratio,
        base_time: "2025-03-27 10:00:00".to_string(),
    }
}

#[test]
fn test_ddm_row_count_includes_fault_readings() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("ddm.parquet");
    let summary = run_ddm(&ddm_args(&output, 200, 0.05, SEED)).unwrap();

    // 200 healthy readings plus 6 readings for each of the 10 faulty modules.
    assert_eq!(summary.rows, 260);

    let contents = ParquetContents::read(&output).unwrap();
    let faults = contents
        .bool_column("is_fault")
        .unwrap()
        .into_iter()
        .filter(|v| *v == Some(true))
        .count();
    assert_eq!(faults, 60);
    assert_module_ids(&contents.string_column("module_id").unwrap());
}

#[test]
fn test_ddm_rejects_bad_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("ddm.parquet");
    assert!(run_ddm(&ddm_args(&output, 10, 1.5, SEED)).is_err());

    let mut args = ddm_args(&output, 10, 0.1, SEED);
    args.base_time = "yesterday".to_string();
    assert!(run_ddm(&args).is_err());
}

#[test]
fn test_ddm_seeds_change_values_not_columns() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.parquet");
    let second = temp_dir.path().join("b.parquet");
    run_ddm(&ddm_args(&first, 100, 0.0, 1)).unwrap();
    run_ddm(&ddm_args(&second, 100, 0.0, 2)).unwrap();

    let a = ParquetContents::read(&first).unwrap();
    let b = ParquetContents::read(&second).unwrap();
    assert_eq!(a.column_names(), b.column_names());
    assert_ne!(a.string_column("module_id"), b.string_column("module_id"));
}

#[test]
fn test_same_seed_reproduces_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.parquet");
    let second = temp_dir.path().join("b.parquet");
    run_ddm(&ddm_args(&first, 100, 0.1, SEED)).unwrap();
    run_ddm(&ddm_args(&second, 100, 0.1, SEED)).unwrap();

    let a = ParquetContents::read(&first).unwrap();
    let b = ParquetContents::read(&second).unwrap();
    assert_eq!(a.string_column("module_id"), b.string_column("module_id"));
    assert_eq!(a.f64_column("rx_power"), b.f64_column("rx_power"));
}

#[test]
fn test_prediction_dates_follow_remaining_days() {
    let temp_dir = TempDir::new().unwrap();
    let args = PredictionArgs {
        common: common_args(300, &temp_dir.path().join("nested/predict.parquet"), SEED),
        window: window("2025-03-01", "2025-04-01"),
    };
    let summary = run_prediction(&args).unwrap();
    assert_eq!(summary.rows, 300);

    let contents = ParquetContents::read(&summary.output).unwrap();
    assert_module_ids(&contents.string_column("module_id").unwrap());
    for p in contents.f64_column("failure_probability").unwrap().into_iter().flatten() {
        assert!((0.0..=1.0).contains(&p), "{p}");
    }
    for date in contents.string_column("predicted_date").unwrap().into_iter().flatten() {
        assert!(date.as_str() >= "2025-03-01", "{date}");
    }
}

#[test]
fn test_prediction_seeds_change_values_not_columns() {
    let temp_dir = TempDir::new().unwrap();
    let run = |seed: u64| {
        let args = PredictionArgs {
            common: common_args(50, &temp_dir.path().join(format!("predict-{seed}.parquet")), seed),
            window: window("2025-03-01", "2025-04-01"),
        };
        ParquetContents::read(run_prediction(&args).unwrap().output).unwrap()
    };
    let a = run(1);
    let b = run(2);
    assert_eq!(a.column_names(), b.column_names());
    assert_ne!(a.string_column("module_id"), b.string_column("module_id"));
}
