//! netsim - synthetic network telemetry datasets.
//!
//! The binary exposes one subcommand per generator; the handlers live in
//! [`generate`] so they can be driven directly from tests.

pub mod generate;

pub use generate::{
    run_ddm, run_grpc, run_prediction, run_snmp, run_syslog, DdmArgs, GrpcArgs, PredictionArgs,
    RunSummary, SnmpArgs, SummaryFormat, SyslogArgs,
};
