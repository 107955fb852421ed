//! Generator subcommand handlers.
//!
//! Every handler follows the same pipeline: resolve arguments against the
//! generator's defaults, build the run RNG, generate typed records, normalize
//! them into a [`NormalizedTable`] and write one Parquet file.

pub mod ddm;
pub mod grpc;
pub mod prediction;
pub mod snmp;
pub mod summary;
pub mod syslog;

pub use ddm::{run_ddm, DdmArgs};
pub use grpc::{run_grpc, GrpcArgs};
pub use prediction::{run_prediction, PredictionArgs};
pub use snmp::{run_snmp, SnmpArgs};
pub use summary::{RunSummary, SummaryFormat};
pub use syslog::{run_syslog, SyslogArgs};

use anyhow::Context;
use netsim_core::NormalizedTable;
use netsim_parquet::{ParquetWriter, WriteMetrics};
use std::path::Path;

/// Write a normalized table, creating the output directory if needed.
pub(crate) fn write_table(
    table: &NormalizedTable,
    output: &Path,
    batch_size: usize,
) -> anyhow::Result<WriteMetrics> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {parent:?}"))?;
    }

    let writer = ParquetWriter::new(batch_size).context("Invalid batch size")?;
    writer
        .write(table, output)
        .with_context(|| format!("Failed to write {output:?}"))
}
