//! Reading generated files back, for verification and tests.

use crate::error::ParquetWriterError;
use arrow::array::{Array, AsArray};
use arrow::datatypes::{Float64Type, Int64Type, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;

/// All record batches of a Parquet file, held in memory.
#[derive(Debug)]
pub struct ParquetContents {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl ParquetContents {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ParquetWriterError> {
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let schema = builder.schema().clone();
        let reader = builder.build()?;

        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch?);
        }
        Ok(Self { schema, batches })
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema.fields().iter().map(|f| f.name().clone()).collect()
    }

    /// Values of a text column, or `None` if the column is missing or not text.
    pub fn string_column(&self, name: &str) -> Option<Vec<Option<String>>> {
        let mut values = Vec::with_capacity(self.num_rows());
        for batch in &self.batches {
            let array = batch.column_by_name(name)?.as_string_opt::<i32>()?;
            values.extend(array.iter().map(|v| v.map(str::to_string)));
        }
        Some(values)
    }

    pub fn i64_column(&self, name: &str) -> Option<Vec<Option<i64>>> {
        let mut values = Vec::with_capacity(self.num_rows());
        for batch in &self.batches {
            let array = batch.column_by_name(name)?.as_primitive_opt::<Int64Type>()?;
            values.extend(array.iter());
        }
        Some(values)
    }

    pub fn f64_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let mut values = Vec::with_capacity(self.num_rows());
        for batch in &self.batches {
            let array = batch.column_by_name(name)?.as_primitive_opt::<Float64Type>()?;
            values.extend(array.iter());
        }
        Some(values)
    }

    pub fn bool_column(&self, name: &str) -> Option<Vec<Option<bool>>> {
        let mut values = Vec::with_capacity(self.num_rows());
        for batch in &self.batches {
            let array = batch.column_by_name(name)?.as_boolean_opt()?;
            values.extend(array.iter());
        }
        Some(values)
    }

    /// Number of nulls in a column across all batches.
    pub fn null_count(&self, name: &str) -> Option<usize> {
        let mut nulls = 0;
        for batch in &self.batches {
            nulls += batch.column_by_name(name)?.null_count();
        }
        Some(nulls)
    }
}
