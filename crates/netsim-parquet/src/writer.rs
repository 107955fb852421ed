//! Normalized table to Parquet.

use crate::error::ParquetWriterError;
use arrow::array::{
    ArrayRef, BooleanBuilder, Float64Builder, Int64Builder, StringBuilder,
};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use netsim_core::{CellValue, ColumnType, NormalizedTable, TableSchema};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default number of rows per record batch.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Number of record batches written.
    pub batches_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent building Arrow arrays.
    pub conversion_duration: Duration,
    /// Time spent encoding and writing.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Arrow schema for a table schema.
pub fn arrow_schema(schema: &TableSchema) -> SchemaRef {
    let fields: Vec<Field> = schema
        .columns
        .iter()
        .map(|c| Field::new(c.name, arrow_type(c.column_type), c.nullable))
        .collect();
    Arc::new(Schema::new(fields))
}

fn arrow_type(column_type: ColumnType) -> DataType {
    match column_type {
        ColumnType::Utf8 => DataType::Utf8,
        ColumnType::Int64 => DataType::Int64,
        ColumnType::Float64 => DataType::Float64,
        ColumnType::Bool => DataType::Boolean,
    }
}

/// Writes one normalized table per file.
pub struct ParquetWriter {
    batch_size: usize,
}

impl Default for ParquetWriter {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ParquetWriter {
    pub fn new(batch_size: usize) -> Result<Self, ParquetWriterError> {
        if batch_size == 0 {
            return Err(ParquetWriterError::InvalidBatchSize);
        }
        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Write `table` to `output_path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(
        &self,
        table: &NormalizedTable,
        output_path: P,
    ) -> Result<WriteMetrics, ParquetWriterError> {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();
        let output_path = output_path.as_ref();

        info!(
            "Writing {} rows of '{}' to '{}'",
            table.num_rows(),
            table.schema().name,
            output_path.display()
        );

        let schema = arrow_schema(table.schema());
        let file = File::create(output_path)?;
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

        for chunk in table.rows().chunks(self.batch_size) {
            let convert_start = Instant::now();
            let batch = build_batch(table.schema(), schema.clone(), chunk)?;
            metrics.conversion_duration += convert_start.elapsed();

            let write_start = Instant::now();
            writer.write(&batch)?;
            metrics.write_duration += write_start.elapsed();

            metrics.rows_written += batch.num_rows() as u64;
            metrics.batches_written += 1;
            debug!("Written {} rows", metrics.rows_written);
        }

        let close_start = Instant::now();
        writer.close()?;
        metrics.write_duration += close_start.elapsed();

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Wrote {} rows in {:?} ({:.0} rows/sec, {} bytes)",
            metrics.rows_written,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.file_size_bytes
        );
        Ok(metrics)
    }
}

enum ColumnBuilder {
    Utf8(StringBuilder),
    Int64(Int64Builder),
    Float64(Float64Builder),
    Bool(BooleanBuilder),
}

impl ColumnBuilder {
    fn new(column_type: ColumnType, capacity: usize) -> Self {
        match column_type {
            ColumnType::Utf8 => ColumnBuilder::Utf8(StringBuilder::with_capacity(capacity, capacity * 16)),
            ColumnType::Int64 => ColumnBuilder::Int64(Int64Builder::with_capacity(capacity)),
            ColumnType::Float64 => ColumnBuilder::Float64(Float64Builder::with_capacity(capacity)),
            ColumnType::Bool => ColumnBuilder::Bool(BooleanBuilder::with_capacity(capacity)),
        }
    }

    /// Cells have already been normalized, so only nulls and the column's own
    /// type reach here.
    fn append(&mut self, value: &CellValue) {
        match (self, value) {
            (ColumnBuilder::Utf8(b), CellValue::Utf8(s)) => b.append_value(s),
            (ColumnBuilder::Int64(b), CellValue::Int64(i)) => b.append_value(*i),
            (ColumnBuilder::Float64(b), CellValue::Float64(f)) => b.append_value(*f),
            (ColumnBuilder::Bool(b), CellValue::Bool(v)) => b.append_value(*v),
            (ColumnBuilder::Utf8(b), _) => b.append_null(),
            (ColumnBuilder::Int64(b), _) => b.append_null(),
            (ColumnBuilder::Float64(b), _) => b.append_null(),
            (ColumnBuilder::Bool(b), _) => b.append_null(),
        }
    }

    fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Utf8(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Int64(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Float64(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Bool(mut b) => Arc::new(b.finish()),
        }
    }
}

fn build_batch(
    table_schema: &TableSchema,
    schema: SchemaRef,
    rows: &[Vec<CellValue>],
) -> Result<RecordBatch, ParquetWriterError> {
    let mut builders: Vec<ColumnBuilder> = table_schema
        .columns
        .iter()
        .map(|c| ColumnBuilder::new(c.column_type, rows.len()))
        .collect();

    for row in rows {
        for (builder, value) in builders.iter_mut().zip(row) {
            builder.append(value);
        }
    }

    let columns: Vec<ArrayRef> = builders.into_iter().map(ColumnBuilder::finish).collect();
    Ok(RecordBatch::try_new(schema, columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ParquetContents;
    use netsim_core::{ColumnDef, Row};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn sample_table(rows: usize) -> NormalizedTable {
        let schema = TableSchema::new(
            "sample",
            vec![
                ColumnDef::utf8("name"),
                ColumnDef::int64("count"),
                ColumnDef::float64("ratio").nullable(),
                ColumnDef::bool("flag"),
            ],
        );
        let rows = (0..rows).map(|i| {
            let row = Row::new()
                .with("name", format!("row-{i}"))
                .with("count", i as i64)
                .with("flag", i % 2 == 0);
            if i % 3 == 0 {
                row.with("ratio", i as f64 / 10.0)
            } else {
                row
            }
        });
        let mut rng = StdRng::seed_from_u64(42);
        NormalizedTable::from_rows(schema, rows, &mut rng).unwrap()
    }

    #[test]
    fn test_write_splits_into_batches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.parquet");

        let writer = ParquetWriter::new(10).unwrap();
        let metrics = writer.write(&sample_table(25), &path).unwrap();

        assert_eq!(metrics.rows_written, 25);
        assert_eq!(metrics.batches_written, 3);
        assert!(metrics.file_size_bytes > 0);

        let contents = ParquetContents::read(&path).unwrap();
        assert_eq!(contents.num_rows(), 25);
        assert_eq!(contents.column_names(), vec!["name", "count", "ratio", "flag"]);
    }

    #[test]
    fn test_nulls_survive_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nulls.parquet");
        ParquetWriter::default().write(&sample_table(6), &path).unwrap();

        let contents = ParquetContents::read(&path).unwrap();
        let ratio = contents.f64_column("ratio").unwrap();
        assert_eq!(ratio[0], Some(0.0));
        assert_eq!(ratio[1], None);
        assert_eq!(ratio[3], Some(0.3));
        let names = contents.string_column("name").unwrap();
        assert_eq!(names[5].as_deref(), Some("row-5"));
    }

    #[test]
    fn test_empty_table_still_writes_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.parquet");
        let metrics = ParquetWriter::default().write(&sample_table(0), &path).unwrap();
        assert_eq!(metrics.rows_written, 0);
        assert_eq!(ParquetContents::read(&path).unwrap().num_rows(), 0);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        assert!(matches!(
            ParquetWriter::new(0),
            Err(ParquetWriterError::InvalidBatchSize)
        ));
    }
}
