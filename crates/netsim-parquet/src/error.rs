//! Error types for the Parquet writer and reader.

use thiserror::Error;

/// Errors that can occur while writing or reading a telemetry table.
#[derive(Error, Debug)]
pub enum ParquetWriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow error while building record batches.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet encoding or decoding error.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Batch size of zero.
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
}
