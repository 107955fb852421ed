//! `netsim ddm` handler.

use super::{write_table, RunSummary};
use anyhow::Context;
use clap::Args;
use netsim_args::CommonGenerateArgs;
use netsim_core::random::rng_from_seed;
use netsim_core::time::parse_timestamp;
use netsim_core::NormalizedTable;
use netsim_generator::ddm::fault_module_count;
use netsim_generator::generate_ddm;
use tracing::info;

pub const DEFAULT_COUNT: u64 = 1_000_000;
pub const DEFAULT_OUTPUT: &str = "ddm_fault.parquet";
pub const DEFAULT_FAULT_RATIO: f64 = 0.01;
pub const DEFAULT_BASE_TIME: &str = "2025-03-27 10:00:00";

/// Optical DDM readings with injected faults.
#[derive(Args, Clone, Debug)]
pub struct DdmArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// Share of modules that fail, between 0 and 1
    #[arg(long, env = "NETSIM_FAULT_RATIO", default_value_t = DEFAULT_FAULT_RATIO)]
    pub fault_ratio: f64,

    /// Reference time readings are spread back from, "YYYY-MM-DD HH:MM:SS"
    #[arg(long, env = "NETSIM_BASE_TIME", default_value = DEFAULT_BASE_TIME)]
    pub base_time: String,
}

pub fn run_ddm(args: &DdmArgs) -> anyhow::Result<RunSummary> {
    let count = args.common.count_or(DEFAULT_COUNT);
    let output = args.common.output_or(DEFAULT_OUTPUT);
    let base_time = parse_timestamp(&args.base_time)
        .with_context(|| format!("Invalid base time '{}'", args.base_time))?;

    info!(
        "Generating {} DDM readings with {} faulty modules (seed={:?})",
        count,
        fault_module_count(count, args.fault_ratio),
        args.common.seed
    );

    let mut rng = rng_from_seed(args.common.seed);
    let records = generate_ddm(&mut rng, count, args.fault_ratio, base_time)?;

    let table = NormalizedTable::from_records(&records, &mut rng)
        .context("Failed to normalize DDM readings")?;
    let metrics = write_table(&table, &output, args.common.batch_size)?;

    Ok(RunSummary::from_table(
        "ddm",
        &table,
        "device",
        "vendor",
        Some("speed"),
        &output,
        &metrics,
    ))
}
