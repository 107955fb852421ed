//! Table schemas and the normalization step that runs before serialization.
//!
//! Every record type declares its columns once through [`TelemetryRecord`].
//! [`NormalizedTable::from_records`] then turns a batch of records into rows
//! that match the schema exactly: missing keys are backfilled according to
//! each column's [`Backfill`] rule and values are checked against the column
//! type. Writers only ever see normalized tables.

use crate::random::pick;
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Column '{column}' in table '{table}' expects {expected}, got {found}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: ColumnType,
        found: &'static str,
    },

    #[error("Column '{column}' in table '{table}' is not nullable and has no backfill value")]
    MissingValue { table: String, column: String },

    #[error("Column '{column}' appears more than once in table '{table}'")]
    DuplicateColumn { table: String, column: String },
}

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Utf8,
    Int64,
    Float64,
    Bool,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Utf8 => write!(f, "utf8"),
            ColumnType::Int64 => write!(f, "int64"),
            ColumnType::Float64 => write!(f, "float64"),
            ColumnType::Bool => write!(f, "bool"),
        }
    }
}

/// What to write when a row has no value for a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backfill {
    /// Leave the cell null. Only valid for nullable columns.
    Null,
    /// Empty string.
    Empty,
    /// Zero of the column's numeric type, `false` for booleans.
    Zero,
    /// A random entry of a fixed vocabulary.
    OneOf(&'static [&'static str]),
}

/// A single column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub backfill: Backfill,
}

impl ColumnDef {
    const fn required(name: &'static str, column_type: ColumnType, backfill: Backfill) -> Self {
        Self {
            name,
            column_type,
            nullable: false,
            backfill,
        }
    }

    /// Non-null text column, backfilled with `""`.
    pub const fn utf8(name: &'static str) -> Self {
        Self::required(name, ColumnType::Utf8, Backfill::Empty)
    }

    /// Non-null integer column, backfilled with `0`.
    pub const fn int64(name: &'static str) -> Self {
        Self::required(name, ColumnType::Int64, Backfill::Zero)
    }

    /// Non-null float column, backfilled with `0.0`.
    pub const fn float64(name: &'static str) -> Self {
        Self::required(name, ColumnType::Float64, Backfill::Zero)
    }

    /// Non-null boolean column, backfilled with `false`.
    pub const fn bool(name: &'static str) -> Self {
        Self::required(name, ColumnType::Bool, Backfill::Zero)
    }

    /// Make the column nullable; missing values stay null.
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self.backfill = Backfill::Null;
        self
    }

    /// Backfill missing values from a vocabulary.
    pub const fn backfill_from(mut self, vocabulary: &'static [&'static str]) -> Self {
        self.backfill = Backfill::OneOf(vocabulary);
        self
    }
}

/// Ordered set of columns for one output table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    pub fn new(name: &'static str, columns: Vec<ColumnDef>) -> Self {
        Self { name, columns }
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Reject schemas that name a column twice.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name) {
                return Err(SchemaError::DuplicateColumn {
                    table: self.name.to_string(),
                    column: column.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Utf8(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int64(_) => "int64",
            CellValue::Float64(_) => "float64",
            CellValue::Utf8(_) => "utf8",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Utf8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float64(f) => Some(*f),
            CellValue::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int64(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int64(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float64(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Utf8(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Utf8(v.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// A record before normalization: a sparse map from column name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<&'static str, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    pub fn with(mut self, name: &'static str, value: impl Into<CellValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<CellValue>) {
        self.fields.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CellValue> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record type that can be written as one row of a table.
pub trait TelemetryRecord {
    /// Schema shared by every record of this type.
    fn table_schema() -> TableSchema;

    /// Field values of this record. Keys absent from the row are backfilled.
    fn to_row(&self) -> Row;
}

/// Rows that match their schema exactly, ready for a columnar writer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    schema: TableSchema,
    rows: Vec<Vec<CellValue>>,
}

impl NormalizedTable {
    /// Normalize a batch of typed records.
    pub fn from_records<T: TelemetryRecord, R: Rng + ?Sized>(
        records: &[T],
        rng: &mut R,
    ) -> Result<Self, SchemaError> {
        Self::from_rows(T::table_schema(), records.iter().map(|r| r.to_row()), rng)
    }

    /// Normalize raw rows against `schema`.
    pub fn from_rows<I, R>(schema: TableSchema, rows: I, rng: &mut R) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = Row>,
        R: Rng + ?Sized,
    {
        schema.validate()?;
        let mut normalized = Vec::new();
        let mut ignored = 0usize;

        for mut row in rows {
            let mut cells = Vec::with_capacity(schema.columns.len());
            for column in &schema.columns {
                let value = row.remove(column.name).unwrap_or(CellValue::Null);
                cells.push(normalize_cell(&schema, column, value, rng)?);
            }
            ignored += row.len();
            normalized.push(cells);
        }

        if ignored > 0 {
            tracing::debug!(
                "Ignored {} field values with no column in table '{}'",
                ignored,
                schema.name
            );
        }

        Ok(Self {
            schema,
            rows: normalized,
        })
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue>> {
        let idx = self.schema.columns.iter().position(|c| c.name == name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Number of distinct non-null text values in a column.
    pub fn distinct_count(&self, name: &str) -> usize {
        self.distinct_values(name).len()
    }

    /// Distinct non-null text values in a column, in first-seen order.
    pub fn distinct_values(&self, name: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut values = Vec::new();
        if let Some(column) = self.column(name) {
            for value in column.filter_map(CellValue::as_str) {
                if seen.insert(value) {
                    values.push(value.to_string());
                }
            }
        }
        values
    }
}

fn normalize_cell<R: Rng + ?Sized>(
    schema: &TableSchema,
    column: &ColumnDef,
    value: CellValue,
    rng: &mut R,
) -> Result<CellValue, SchemaError> {
    let value = match (column.column_type, value) {
        (_, CellValue::Null) => backfill(column, rng),
        (ColumnType::Utf8, v @ CellValue::Utf8(_)) => v,
        (ColumnType::Int64, v @ CellValue::Int64(_)) => v,
        (ColumnType::Float64, v @ CellValue::Float64(_)) => v,
        (ColumnType::Float64, CellValue::Int64(i)) => CellValue::Float64(i as f64),
        (ColumnType::Bool, v @ CellValue::Bool(_)) => v,
        (expected, other) => {
            return Err(SchemaError::TypeMismatch {
                table: schema.name.to_string(),
                column: column.name.to_string(),
                expected,
                found: other.type_name(),
            })
        }
    };

    if value.is_null() && !column.nullable {
        return Err(SchemaError::MissingValue {
            table: schema.name.to_string(),
            column: column.name.to_string(),
        });
    }
    Ok(value)
}

fn backfill<R: Rng + ?Sized>(column: &ColumnDef, rng: &mut R) -> CellValue {
    match (column.backfill, column.column_type) {
        (Backfill::Null, _) => CellValue::Null,
        (Backfill::Empty, ColumnType::Utf8) => CellValue::Utf8(String::new()),
        (Backfill::OneOf(vocab), ColumnType::Utf8) if !vocab.is_empty() => {
            CellValue::Utf8(pick(rng, vocab).to_string())
        }
        (_, ColumnType::Int64) => CellValue::Int64(0),
        (_, ColumnType::Float64) => CellValue::Float64(0.0),
        (_, ColumnType::Bool) => CellValue::Bool(false),
        (_, ColumnType::Utf8) => CellValue::Utf8(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{DATACENTERS, RACKS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_schema() -> TableSchema {
        TableSchema::new(
            "ports",
            vec![
                ColumnDef::utf8("device"),
                ColumnDef::utf8("datacenter").backfill_from(DATACENTERS),
                ColumnDef::utf8("rack").backfill_from(RACKS),
                ColumnDef::int64("speed"),
                ColumnDef::float64("temperature"),
                ColumnDef::utf8("reason").nullable(),
                ColumnDef::bool("up"),
            ],
        )
    }

    #[test]
    fn test_backfills_missing_columns() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = vec![
            Row::new().with("device", "leaf-1-1").with("speed", 100i64),
            Row::new()
                .with("device", "leaf-1-2")
                .with("datacenter", "DC2")
                .with("temperature", 41.5),
        ];
        let table = NormalizedTable::from_rows(test_schema(), rows, &mut rng).unwrap();

        assert_eq!(table.num_rows(), 2);
        let first = &table.rows()[0];
        assert!(DATACENTERS.contains(&first[1].as_str().unwrap()));
        assert!(RACKS.contains(&first[2].as_str().unwrap()));
        assert_eq!(first[4], CellValue::Float64(0.0));
        assert_eq!(first[5], CellValue::Null);
        assert_eq!(first[6], CellValue::Bool(false));

        let second = &table.rows()[1];
        assert_eq!(second[1], CellValue::Utf8("DC2".to_string()));
        assert_eq!(second[3], CellValue::Int64(0));
    }

    #[test]
    fn test_vocabulary_backfill_never_null() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = (0..100).map(|_| Row::new());
        let table = NormalizedTable::from_rows(test_schema(), rows, &mut rng).unwrap();
        for value in table.column("datacenter").unwrap() {
            assert!(DATACENTERS.contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn test_widens_int_to_float() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = vec![Row::new().with("temperature", 40i64)];
        let table = NormalizedTable::from_rows(test_schema(), rows, &mut rng).unwrap();
        assert_eq!(table.rows()[0][4], CellValue::Float64(40.0));
    }

    #[test]
    fn test_type_mismatch() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = vec![Row::new().with("speed", "fast")];
        let err = NormalizedTable::from_rows(test_schema(), rows, &mut rng).unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { found: "utf8", .. }));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let schema = TableSchema::new("dup", vec![ColumnDef::utf8("a"), ColumnDef::int64("a")]);
        let err = NormalizedTable::from_rows(schema, Vec::new(), &mut rng).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateColumn { .. }));
    }

    #[test]
    fn test_distinct_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = ["a", "b", "a", "c"]
            .into_iter()
            .map(|d| Row::new().with("device", d));
        let table = NormalizedTable::from_rows(test_schema(), rows, &mut rng).unwrap();
        assert_eq!(table.distinct_values("device"), vec!["a", "b", "c"]);
        assert_eq!(table.distinct_count("missing"), 0);
    }
}
