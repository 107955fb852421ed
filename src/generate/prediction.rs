//! `netsim prediction` handler.

use super::{write_table, RunSummary};
use anyhow::Context;
use clap::Args;
use netsim_args::{CommonGenerateArgs, TimeWindowArgs};
use netsim_core::random::rng_from_seed;
use netsim_core::NormalizedTable;
use netsim_generator::generate_predictions;
use tracing::info;

pub const DEFAULT_COUNT: u64 = 1_000_000;
pub const DEFAULT_OUTPUT: &str = "predict_data.parquet";
pub const DEFAULT_START: &str = "2025-03-01";
pub const DEFAULT_END: &str = "2025-04-01";

/// Remaining-life predictions for optical modules.
#[derive(Args, Clone, Debug)]
pub struct PredictionArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    #[command(flatten)]
    pub window: TimeWindowArgs,
}

pub fn run_prediction(args: &PredictionArgs) -> anyhow::Result<RunSummary> {
    let count = args.common.count_or(DEFAULT_COUNT);
    let output = args.common.output_or(DEFAULT_OUTPUT);
    let window = args
        .window
        .window_or(DEFAULT_START, DEFAULT_END)
        .context("Invalid time window")?;

    info!(
        "Generating {} life predictions (seed={:?})",
        count, args.common.seed
    );

    let mut rng = rng_from_seed(args.common.seed);
    let records = generate_predictions(&mut rng, count, &window);

    let table = NormalizedTable::from_records(&records, &mut rng)
        .context("Failed to normalize predictions")?;
    let metrics = write_table(&table, &output, args.common.batch_size)?;

    Ok(RunSummary::from_table(
        "prediction",
        &table,
        "device",
        "vendor",
        Some("speed"),
        &output,
        &metrics,
    ))
}
