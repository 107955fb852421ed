//! Command-line argument groups shared by the netsim generator subcommands.
//!
//! Generators differ in their default counts, outputs and windows, so the
//! groups here keep those fields optional and each subcommand resolves them
//! against its own defaults.

use clap::Args;
use netsim_core::{Environment, TimeWindow, TimeWindowError};
use std::path::PathBuf;

/// Rows per Parquet record batch unless overridden.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Arguments every generator takes.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonGenerateArgs {
    /// Number of records to generate [default depends on the generator]
    #[arg(long, env = "NETSIM_COUNT")]
    pub count: Option<u64>,

    /// Output Parquet file [default depends on the generator]
    #[arg(long, short = 'o', env = "NETSIM_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible output (omit for a different dataset each run)
    #[arg(long, env = "NETSIM_SEED")]
    pub seed: Option<u64>,

    /// Rows per record batch in the output file
    #[arg(long, env = "NETSIM_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl CommonGenerateArgs {
    pub fn count_or(&self, default: u64) -> u64 {
        self.count.unwrap_or(default)
    }

    pub fn output_or(&self, default: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(default))
    }
}

/// Sampling window.
#[derive(Args, Clone, Debug, Default)]
pub struct TimeWindowArgs {
    /// First day of the window, YYYY-MM-DD
    #[arg(long = "start-date", visible_alias = "start", env = "NETSIM_START_DATE")]
    pub start_date: Option<String>,

    /// Day the window ends on (exclusive midnight), YYYY-MM-DD
    #[arg(long = "end-date", visible_alias = "end", env = "NETSIM_END_DATE")]
    pub end_date: Option<String>,
}

impl TimeWindowArgs {
    /// Build the window, filling unset bounds from the generator's defaults.
    pub fn window_or(
        &self,
        default_start: &str,
        default_end: &str,
    ) -> Result<TimeWindow, TimeWindowError> {
        TimeWindow::from_dates(
            self.start_date.as_deref().unwrap_or(default_start),
            self.end_date.as_deref().unwrap_or(default_end),
        )
    }
}

/// Simulated network.
#[derive(Args, Clone, Debug)]
pub struct TopologyArgs {
    /// Network environment preset (datacenter, enterprise, isp, campus, complete)
    #[arg(long, env = "NETSIM_ENVIRONMENT", default_value = "datacenter")]
    pub environment: String,

    /// Number of devices to simulate [default depends on the generator]
    #[arg(long, env = "NETSIM_DEVICES")]
    pub devices: Option<u64>,
}

impl TopologyArgs {
    /// Unknown names fall back to the datacenter preset.
    pub fn environment(&self) -> Environment {
        Environment::from_name(&self.environment)
    }

    pub fn devices_or(&self, default: u64) -> u64 {
        self.devices.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonGenerateArgs,
        #[command(flatten)]
        window: TimeWindowArgs,
        #[command(flatten)]
        topology: TopologyArgs,
    }

    #[test]
    fn test_defaults_resolve_per_generator() {
        let cli = TestCli::try_parse_from(["netsim"]).unwrap();
        assert_eq!(cli.common.count_or(1000), 1000);
        assert_eq!(cli.common.output_or("grpc_data.parquet"), PathBuf::from("grpc_data.parquet"));
        assert_eq!(cli.common.batch_size, DEFAULT_BATCH_SIZE);
        assert!(cli.common.seed.is_none());
        assert_eq!(cli.topology.environment(), Environment::Datacenter);
        assert_eq!(cli.topology.devices_or(100), 100);

        let window = cli.window.window_or("2025-02-01", "2025-03-01").unwrap();
        assert_eq!(window.seconds(), 28 * 86_400);
    }

    #[test]
    fn test_start_end_aliases() {
        let cli = TestCli::try_parse_from([
            "netsim", "--start", "2025-01-01", "--end", "2025-01-02", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(cli.common.seed, Some(7));
        let window = cli.window.window_or("2025-02-01", "2025-03-01").unwrap();
        assert_eq!(window.seconds(), 86_400);
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let cli = TestCli::try_parse_from([
            "netsim",
            "--start-date",
            "2025-03-01",
            "--end-date",
            "2025-02-01",
        ])
        .unwrap();
        assert!(cli.window.window_or("2025-02-01", "2025-03-01").is_err());
    }
}
