//! Reading tables from files and streams

use crate::config::TableFormat;
use crate::table::Table;
use csv::{ReaderBuilder, StringRecord, Trim};
use evodist_core::{Error, Result, Sample};
use evodist_histogram::{PreBinnedHistogram, TimeSeries};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Reads delimiter-separated numeric tables
#[derive(Debug, Clone, Default)]
pub struct TableReader {
    format: TableFormat,
}

impl TableReader {
    /// Create a reader for the given layout
    pub fn new(format: TableFormat) -> Self {
        Self { format }
    }

    /// The layout this reader expects
    pub fn format(&self) -> &TableFormat {
        &self.format
    }

    /// Read a whole file into a table
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn read(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
        let table = self.read_from(file, &path.display().to_string())?;
        debug!("Loaded {} rows of {} columns", table.len(), table.width());
        Ok(table)
    }

    /// Read a table from any byte stream; `source` names it in errors
    pub fn read_from<R: Read>(&self, reader: R, source: &str) -> Result<Table> {
        let mut csv = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.format.delimiter)
            .comment(self.format.comment)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut width = None;
        for record in csv.records() {
            let record = record.map_err(|e| Error::MalformedInput(format!("{source}: {e}")))?;
            let line = record.position().map_or(0, |p| p.line());
            let row = parse_row(&record, source, line)?;
            if row.is_empty() {
                continue;
            }

            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(Error::column_mismatch(source, line, expected, row.len()));
            }
            rows.push(row);
        }

        Table::new(source, rows)
    }

    /// Read `(value, weight)` rows
    pub fn read_samples(&self, path: &Path) -> Result<Vec<Sample>> {
        self.read(path)?.into_samples()
    }

    /// Read `(size, frequency)` rows of an already aggregated histogram
    pub fn read_histogram(&self, path: &Path) -> Result<PreBinnedHistogram> {
        self.read(path)?.into_histogram()
    }

    /// Read `(value, w1, .., wn)` rows
    pub fn read_weighted_rows(&self, path: &Path) -> Result<Vec<(f64, Vec<f64>)>> {
        self.read(path)?.into_weighted_rows()
    }

    /// Read `(time, m1, .., mn)` rows with one label per metric column
    pub fn read_timeseries(&self, path: &Path, labels: &[&str]) -> Result<TimeSeries> {
        self.read(path)?.into_timeseries(labels)
    }
}

// Runs of the delimiter show up as empty fields and are dropped
fn parse_row(record: &StringRecord, source: &str, line: u64) -> Result<Vec<f64>> {
    record
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                Error::MalformedInput(format!("{source}:{line}: cannot parse '{field}' as a number"))
            })
        })
        .collect()
}
