//! End-to-end generator tests.
//!
//! Each test runs a subcommand handler with a fixed seed and a small count
//! into a temporary directory, then reads the Parquet file back and checks
//! the properties every dataset must hold.

mod common;
mod ddm_prediction;
mod grpc;
mod snmp;
mod syslog;
