//! End-of-run summary.

use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use netsim_core::NormalizedTable;
use netsim_parquet::WriteMetrics;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// How the summary is printed on stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    #[default]
    Table,
    /// Single JSON line, for scripts.
    Json,
    /// Print nothing.
    Off,
}

/// What a generator run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generator: &'static str,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
    pub unique_devices: usize,
    pub vendors: Vec<String>,
    /// Name of the column the dataset is broken down by, if any.
    pub category_column: Option<&'static str>,
    pub categories: Vec<String>,
    pub file_size_bytes: u64,
    pub duration_secs: f64,
    pub rows_per_second: f64,
}

impl RunSummary {
    pub fn from_table(
        generator: &'static str,
        table: &NormalizedTable,
        device_column: &str,
        vendor_column: &str,
        category_column: Option<&'static str>,
        output: &Path,
        metrics: &WriteMetrics,
    ) -> Self {
        let mut vendors = table.distinct_values(vendor_column);
        vendors.sort();
        let mut categories = category_column
            .map(|c| table.distinct_values(c))
            .unwrap_or_default();
        categories.sort();

        Self {
            generator,
            output: output.to_path_buf(),
            rows: table.num_rows(),
            columns: table
                .schema()
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            unique_devices: table.distinct_count(device_column),
            vendors,
            category_column,
            categories,
            file_size_bytes: metrics.file_size_bytes,
            duration_secs: metrics.total_duration.as_secs_f64(),
            rows_per_second: metrics.rows_per_second(),
        }
    }

    /// Render per `format`; nothing for [`SummaryFormat::Off`].
    pub fn render(&self, format: SummaryFormat) -> anyhow::Result<Option<String>> {
        match format {
            SummaryFormat::Table => Ok(Some(format_table(self))),
            SummaryFormat::Json => Ok(Some(serde_json::to_string(self)?)),
            SummaryFormat::Off => Ok(None),
        }
    }
}

/// Format a summary as a two-column table.
pub fn format_table(summary: &RunSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Metric"),
        Cell::new(summary.generator).fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(summary.output.display()),
    ]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(format_number(summary.rows as u64))]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(summary.columns.len())]);
    table.add_row(vec![
        Cell::new("Unique devices"),
        Cell::new(format_number(summary.unique_devices as u64)),
    ]);
    table.add_row(vec![
        Cell::new("Vendors"),
        Cell::new(join_or_dash(&summary.vendors)),
    ]);
    if let Some(column) = summary.category_column {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(join_or_dash(&summary.categories)),
        ]);
    }
    table.add_row(vec![
        Cell::new("File size"),
        Cell::new(format_bytes(summary.file_size_bytes)),
    ]);
    table.add_row(vec![
        Cell::new("Duration"),
        Cell::new(format!("{:.2}s", summary.duration_secs)),
    ]);
    table.add_row(vec![
        Cell::new("Rows/sec"),
        Cell::new(format!("{:.1}", summary.rows_per_second)),
    ]);

    table.to_string()
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Thousands separators: 1234567 -> "1,234,567".
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
