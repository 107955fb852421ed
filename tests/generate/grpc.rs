use crate::common::{common_args, topology, window, SEED};
use netsim::{run_grpc, GrpcArgs};
use netsim_generator::grpc::DataType;
use netsim_parquet::ParquetContents;
use tempfile::TempDir;

fn args(dir: &TempDir, count: u64) -> GrpcArgs {
    GrpcArgs {
        common: common_args(count, &dir.path().join("grpc.parquet"), SEED),
        window: window("2025-02-01", "2025-03-01"),
        topology: topology("complete", 20),
        config: None,
    }
}

#[test]
fn test_grpc_writes_requested_rows() {
    let temp_dir = TempDir::new().unwrap();
    let summary = run_grpc(&args(&temp_dir, 500)).unwrap();
    assert_eq!(summary.rows, 500);

    let contents = ParquetContents::read(&summary.output).unwrap();
    assert_eq!(contents.num_rows(), 500);
    assert_eq!(contents.column_names(), summary.columns);

    let known: Vec<&str> = DataType::ALL.iter().map(DataType::as_str).collect();
    for data_type in contents.string_column("data_type").unwrap().into_iter().flatten() {
        assert!(known.contains(&data_type.as_str()), "{data_type}");
    }
}

#[test]
fn test_grpc_payload_is_always_a_json_string() {
    let temp_dir = TempDir::new().unwrap();
    let summary = run_grpc(&args(&temp_dir, 300)).unwrap();

    let contents = ParquetContents::read(&summary.output).unwrap();
    assert_eq!(contents.null_count("raw_data"), Some(0));
    for raw in contents.string_column("raw_data").unwrap().into_iter().flatten() {
        let value: serde_json::Value = serde_json::from_str(&raw)
            .unwrap_or_else(|e| panic!("raw_data is not JSON ({e}): {raw}"));
        assert!(value.is_object());
    }
}

#[test]
fn test_grpc_config_restricts_data_types() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("netsim.yaml");
    let weights: String = DataType::ALL
        .iter()
        .map(|t| {
            let weight = if *t == DataType::Mpls { 1 } else { 0 };
            format!("    {}: {}\n", t.as_str(), weight)
        })
        .collect();
    std::fs::write(&config_path, format!("grpc:\n  data_type_weights:\n{weights}")).unwrap();

    let mut args = args(&temp_dir, 100);
    args.config = Some(config_path);
    let summary = run_grpc(&args).unwrap();
    assert_eq!(summary.categories, vec!["mpls".to_string()]);

    let contents = ParquetContents::read(&summary.output).unwrap();
    assert_eq!(contents.null_count("mpls_service"), Some(0));
    assert_eq!(contents.null_count("vni_id"), Some(100));
}

#[test]
fn test_grpc_rejects_unknown_config_key() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("netsim.yaml");
    std::fs::write(&config_path, "grpc:\n  data_type_weights:\n    bogus: 1\n").unwrap();

    let mut args = args(&temp_dir, 10);
    args.config = Some(config_path);
    let err = run_grpc(&args).unwrap_err();
    assert!(format!("{err:#}").contains("bogus"));
}

#[test]
fn test_grpc_inverted_window_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = args(&temp_dir, 10);
    args.window = window("2025-03-01", "2025-02-01");
    assert!(run_grpc(&args).is_err());
    assert!(!temp_dir.path().join("grpc.parquet").exists());
}

#[test]
fn test_grpc_seeds_change_values_not_columns() {
    let temp_dir = TempDir::new().unwrap();
    let mut first = args(&temp_dir, 50);
    first.common = common_args(50, &temp_dir.path().join("a.parquet"), 1);
    let mut second = args(&temp_dir, 50);
    second.common = common_args(50, &temp_dir.path().join("b.parquet"), 2);

    let a = ParquetContents::read(run_grpc(&first).unwrap().output).unwrap();
    let b = ParquetContents::read(run_grpc(&second).unwrap().output).unwrap();
    assert_eq!(a.column_names(), b.column_names());
    assert_ne!(a.string_column("device_name"), b.string_column("device_name"));
}
