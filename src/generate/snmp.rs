//! `netsim snmp` handler.

use super::{write_table, RunSummary};
use anyhow::Context;
use clap::Args;
use netsim_args::{CommonGenerateArgs, TimeWindowArgs, TopologyArgs};
use netsim_core::random::rng_from_seed;
use netsim_core::NormalizedTable;
use netsim_generator::{SnmpInventory, SnmpSampler};
use tracing::info;

pub const DEFAULT_COUNT: u64 = 10_000;
pub const DEFAULT_DEVICES: u64 = 100;
pub const DEFAULT_OUTPUT: &str = "snmp_data.parquet";
pub const DEFAULT_START: &str = "2025-02-01";
pub const DEFAULT_END: &str = "2025-03-01";

/// SNMP interface polls.
#[derive(Args, Clone, Debug)]
pub struct SnmpArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    #[command(flatten)]
    pub window: TimeWindowArgs,

    #[command(flatten)]
    pub topology: TopologyArgs,
}

pub fn run_snmp(args: &SnmpArgs) -> anyhow::Result<RunSummary> {
    let count = args.common.count_or(DEFAULT_COUNT);
    let output = args.common.output_or(DEFAULT_OUTPUT);
    let window = args
        .window
        .window_or(DEFAULT_START, DEFAULT_END)
        .context("Invalid time window")?;
    let environment = args.topology.environment();

    info!(
        "Generating {} SNMP samples in the {} environment (seed={:?})",
        count,
        environment.as_str(),
        args.common.seed
    );

    let mut rng = rng_from_seed(args.common.seed);
    let inventory = SnmpInventory::generate(
        &mut rng,
        &environment.preset(),
        args.topology.devices_or(DEFAULT_DEVICES),
    )?;
    info!(
        "{} of {} interfaces carry an optical module",
        inventory.optic_count(),
        inventory.interfaces.len()
    );

    let sampler = SnmpSampler::new(&inventory.devices, &inventory.interfaces, window)?;
    let samples = sampler.samples(&mut rng, count);

    let table = NormalizedTable::from_records(&samples, &mut rng)
        .context("Failed to normalize SNMP samples")?;
    let metrics = write_table(&table, &output, args.common.batch_size)?;

    Ok(RunSummary::from_table(
        "snmp",
        &table,
        "device_hostname",
        "device_vendor",
        None,
        &output,
        &metrics,
    ))
}
