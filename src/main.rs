//! Command-line interface for netsim
//!
//! # Usage Examples
//!
//! ```bash
//! # gNMI samples for 50 ISP routers, reproducible
//! netsim grpc --count 5000 --devices 50 --environment isp --seed 42
//!
//! # Override the data type mix
//! netsim grpc --config netsim.yaml --output grpc.parquet
//!
//! # SNMP polls over one week
//! netsim snmp --start-date 2025-02-01 --end-date 2025-02-08
//!
//! # Syslog with module ids shared with the DDM and prediction datasets
//! netsim syslog --count 100000 --devices 200
//! netsim ddm --count 100000 --fault-ratio 0.02
//! netsim prediction --count 100000
//! ```
//!
//! Every flag can also be set through its `NETSIM_*` environment variable.
//! Logs go to stderr (`RUST_LOG`, default `info`); the run summary goes to
//! stdout.

use clap::{Parser, Subcommand};
use netsim::{
    run_ddm, run_grpc, run_prediction, run_snmp, run_syslog, DdmArgs, GrpcArgs, PredictionArgs,
    SnmpArgs, SummaryFormat, SyslogArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netsim")]
#[command(about = "Synthetic network telemetry generator (gRPC, SNMP, syslog, DDM, life prediction)")]
#[command(long_about = None)]
struct Cli {
    /// Summary printed after the file is written
    #[arg(long, value_enum, global = true, default_value_t = SummaryFormat::Table)]
    summary: SummaryFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// gNMI streaming telemetry samples with vendor-shaped JSON payloads
    Grpc {
        #[command(flatten)]
        args: GrpcArgs,
    },

    /// SNMP IF-MIB interface polls with optical readings
    Snmp {
        #[command(flatten)]
        args: SnmpArgs,
    },

    /// Vendor syslog events tagged with the module they concern
    Syslog {
        #[command(flatten)]
        args: SyslogArgs,
    },

    /// Optical DDM readings with injected module faults
    Ddm {
        #[command(flatten)]
        args: DdmArgs,
    },

    /// Remaining-life predictions for optical modules
    Prediction {
        #[command(flatten)]
        args: PredictionArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let summary = match cli.command {
        Commands::Grpc { args } => run_grpc(&args)?,
        Commands::Snmp { args } => run_snmp(&args)?,
        Commands::Syslog { args } => run_syslog(&args)?,
        Commands::Ddm { args } => run_ddm(&args)?,
        Commands::Prediction { args } => run_prediction(&args)?,
    };

    if let Some(rendered) = summary.render(cli.summary)? {
        println!("{rendered}");
    }
    Ok(())
}
