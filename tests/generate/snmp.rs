use crate::common::{assert_module_ids, common_args, topology, window, SEED};
use netsim::{run_snmp, SnmpArgs};
use netsim_core::vocab::{DATACENTERS, PODS, RACKS};
use netsim_parquet::ParquetContents;
use tempfile::TempDir;

fn run(dir: &TempDir, count: u64, environment: &str) -> ParquetContents {
    run_seeded(dir, count, environment, SEED)
}

fn run_seeded(dir: &TempDir, count: u64, environment: &str, seed: u64) -> ParquetContents {
    let args = SnmpArgs {
        common: common_args(count, &dir.path().join(format!("snmp-{seed}.parquet")), seed),
        window: window("2025-02-01", "2025-02-08"),
        topology: topology(environment, 10),
    };
    let summary = run_snmp(&args).unwrap();
    assert_eq!(summary.rows, count as usize);
    ParquetContents::read(&summary.output).unwrap()
}

#[test]
fn test_snmp_admin_down_implies_oper_down() {
    let temp_dir = TempDir::new().unwrap();
    let contents = run(&temp_dir, 1000, "datacenter");
    assert_eq!(contents.num_rows(), 1000);

    let admin = contents.string_column("ifAdminStatus").unwrap();
    let oper = contents.string_column("ifOperStatus").unwrap();
    for (admin, oper) in admin.iter().zip(&oper) {
        if admin.as_deref() == Some("down") {
            assert_eq!(oper.as_deref(), Some("down"));
        }
    }
}

#[test]
fn test_snmp_location_is_always_populated() {
    let temp_dir = TempDir::new().unwrap();
    let contents = run(&temp_dir, 500, "campus");

    for (column, vocab) in [("datacenter", DATACENTERS), ("room", PODS), ("rack", RACKS)] {
        assert_eq!(contents.null_count(column), Some(0), "{column}");
        for value in contents.string_column(column).unwrap().into_iter().flatten() {
            assert!(vocab.contains(&value.as_str()), "{column}={value}");
        }
    }
}

#[test]
fn test_snmp_module_ids_have_seven_components() {
    let temp_dir = TempDir::new().unwrap();
    let contents = run(&temp_dir, 500, "complete");
    assert_module_ids(&contents.string_column("module_id").unwrap());
}

#[test]
fn test_snmp_seeds_change_values_not_columns() {
    let temp_dir = TempDir::new().unwrap();
    let a = run_seeded(&temp_dir, 50, "datacenter", 1);
    let b = run_seeded(&temp_dir, 50, "datacenter", 2);
    assert_eq!(a.column_names(), b.column_names());
    assert_ne!(a.string_column("device_hostname"), b.string_column("device_hostname"));
}
