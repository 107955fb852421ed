//! `netsim grpc` handler.

use super::{write_table, RunSummary};
use anyhow::Context;
use clap::Args;
use netsim_args::{CommonGenerateArgs, TimeWindowArgs, TopologyArgs};
use netsim_core::random::rng_from_seed;
use netsim_core::{NetsimConfig, NormalizedTable};
use netsim_generator::grpc::{build_inventory, GrpcSampler};
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_COUNT: u64 = 1000;
pub const DEFAULT_DEVICES: u64 = 100;
pub const DEFAULT_OUTPUT: &str = "grpc_data.parquet";
pub const DEFAULT_START: &str = "2025-02-01";
pub const DEFAULT_END: &str = "2025-03-01";

/// gNMI streaming telemetry samples.
#[derive(Args, Clone, Debug)]
pub struct GrpcArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    #[command(flatten)]
    pub window: TimeWindowArgs,

    #[command(flatten)]
    pub topology: TopologyArgs,

    /// YAML file with data type weight overrides
    #[arg(long, value_name = "PATH", env = "NETSIM_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn run_grpc(args: &GrpcArgs) -> anyhow::Result<RunSummary> {
    let count = args.common.count_or(DEFAULT_COUNT);
    let output = args.common.output_or(DEFAULT_OUTPUT);
    let window = args
        .window
        .window_or(DEFAULT_START, DEFAULT_END)
        .context("Invalid time window")?;
    let config = match &args.config {
        Some(path) => NetsimConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => NetsimConfig::default(),
    };
    let environment = args.topology.environment();

    info!(
        "Generating {} gRPC samples in the {} environment (seed={:?})",
        count,
        environment.as_str(),
        args.common.seed
    );

    let mut rng = rng_from_seed(args.common.seed);
    let inventory = build_inventory(
        &mut rng,
        &environment.preset(),
        args.topology.devices_or(DEFAULT_DEVICES),
    )?;
    let sampler = GrpcSampler::new(&inventory, window, &config.grpc)?;
    let samples = sampler.samples(&mut rng, count);

    let table = NormalizedTable::from_records(&samples, &mut rng)
        .context("Failed to normalize gRPC samples")?;
    let metrics = write_table(&table, &output, args.common.batch_size)?;

    Ok(RunSummary::from_table(
        "grpc",
        &table,
        "device_name",
        "vendor",
        Some("data_type"),
        &output,
        &metrics,
    ))
}
