//! Parquet output for normalized netsim tables.
//!
//! [`ParquetWriter`] maps a [`NormalizedTable`](netsim_core::NormalizedTable)
//! schema onto Arrow types, builds record batches of a fixed size and writes
//! them with Snappy compression. [`ParquetContents`] reads a file back.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::ParquetWriterError;
pub use reader::ParquetContents;
pub use writer::{arrow_schema, ParquetWriter, WriteMetrics, DEFAULT_BATCH_SIZE};
