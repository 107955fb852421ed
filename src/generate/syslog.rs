//! `netsim syslog` handler.

use super::{write_table, RunSummary};
use anyhow::Context;
use clap::Args;
use netsim_args::{CommonGenerateArgs, TimeWindowArgs, TopologyArgs};
use netsim_core::random::rng_from_seed;
use netsim_core::NormalizedTable;
use netsim_generator::syslog::context::MAX_SYSLOG_DEVICES;
use netsim_generator::{SyslogContext, SyslogSampler};
use tracing::{info, warn};

pub const DEFAULT_COUNT: u64 = 1_000_000;
pub const DEFAULT_DEVICES: u64 = 1000;
pub const DEFAULT_OUTPUT: &str = "network_syslog_data.parquet";
pub const DEFAULT_START: &str = "2025-02-01";
pub const DEFAULT_END: &str = "2025-03-01";

/// Vendor syslog events.
#[derive(Args, Clone, Debug)]
pub struct SyslogArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    #[command(flatten)]
    pub window: TimeWindowArgs,

    #[command(flatten)]
    pub topology: TopologyArgs,
}

pub fn run_syslog(args: &SyslogArgs) -> anyhow::Result<RunSummary> {
    let count = args.common.count_or(DEFAULT_COUNT);
    let output = args.common.output_or(DEFAULT_OUTPUT);
    let window = args
        .window
        .window_or(DEFAULT_START, DEFAULT_END)
        .context("Invalid time window")?;
    let environment = args.topology.environment();
    let devices = args.topology.devices_or(DEFAULT_DEVICES);
    if devices > MAX_SYSLOG_DEVICES {
        warn!("Syslog generator is limited to {MAX_SYSLOG_DEVICES} devices, {devices} requested");
    }

    info!(
        "Generating {} syslog events in the {} environment (seed={:?})",
        count,
        environment.as_str(),
        args.common.seed
    );

    let mut rng = rng_from_seed(args.common.seed);
    let context = SyslogContext::generate(&mut rng, &environment.preset(), devices)?;
    let sampler = SyslogSampler::new(&context, window)?;
    let events = sampler.events(&mut rng, count);

    let table = NormalizedTable::from_records(&events, &mut rng)
        .context("Failed to normalize syslog events")?;
    let metrics = write_table(&table, &output, args.common.batch_size)?;

    Ok(RunSummary::from_table(
        "syslog",
        &table,
        "device",
        "vendor",
        Some("event_category"),
        &output,
        &metrics,
    ))
}
