use netsim_args::{CommonGenerateArgs, TimeWindowArgs, TopologyArgs};
use netsim_core::ModuleId;
use std::path::Path;

pub const SEED: u64 = 42;
pub const BATCH_SIZE: usize = 64;

pub fn common_args(count: u64, output: &Path, seed: u64) -> CommonGenerateArgs {
    CommonGenerateArgs {
        count: Some(count),
        output: Some(output.to_path_buf()),
        seed: Some(seed),
        batch_size: BATCH_SIZE,
    }
}

pub fn window(start: &str, end: &str) -> TimeWindowArgs {
    TimeWindowArgs {
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
    }
}

pub fn topology(environment: &str, devices: u64) -> TopologyArgs {
    TopologyArgs {
        environment: environment.to_string(),
        devices: Some(devices),
    }
}

/// Non-empty module ids parse back into their seven components.
pub fn assert_module_ids(values: &[Option<String>]) {
    for value in values.iter().flatten().filter(|v| !v.is_empty()) {
        let parsed: ModuleId = value
            .parse()
            .unwrap_or_else(|e| panic!("bad module id '{value}': {e}"));
        assert_eq!(parsed.to_string(), *value);
        assert_eq!(value.split('-').count(), 7, "{value}");
    }
}
