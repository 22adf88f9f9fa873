//! Parsed numeric tables and their conversion into evodist data shapes

use evodist_core::{Error, Result, Sample};
use evodist_histogram::{PreBinnedHistogram, TimeSeries};

/// A rectangular table of numbers read from one source
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: String,
    width: usize,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table, checking that it is non-empty and rectangular
    pub fn new(source: impl Into<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let source = source.into();
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Err(Error::empty_source(&source)),
        };
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::column_mismatch(&source, index as u64 + 1, width, row.len()));
        }
        Ok(Self { source, width, rows })
    }

    /// Name of the file (or stream) the table came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the rows
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Values of one column, top to bottom
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.width).then(|| self.rows.iter().map(|r| r[index]).collect())
    }

    fn expect_width(&self, expected: usize) -> Result<()> {
        if self.width != expected {
            return Err(Error::column_mismatch(&self.source, 1, expected, self.width));
        }
        Ok(())
    }

    /// `(value, weight)` rows as samples
    pub fn into_samples(self) -> Result<Vec<Sample>> {
        self.expect_width(2)?;
        Ok(self
            .rows
            .into_iter()
            .map(|r| Sample::new(r[0], r[1]))
            .collect())
    }

    /// `(size, frequency)` rows as a pre-binned histogram
    pub fn into_histogram(self) -> Result<PreBinnedHistogram> {
        self.expect_width(2)?;
        PreBinnedHistogram::new(self.rows.into_iter().map(|r| (r[0], r[1])).collect())
    }

    /// `(value, w1, .., wn)` rows split into value and weight columns
    pub fn into_weighted_rows(self) -> Result<Vec<(f64, Vec<f64>)>> {
        if self.width < 2 {
            return Err(Error::column_mismatch(&self.source, 1, 2, self.width));
        }
        Ok(self
            .rows
            .into_iter()
            .map(|mut r| {
                let weights = r.split_off(1);
                (r[0], weights)
            })
            .collect())
    }

    /// `(time, m1, .., mn)` rows as a time series with one label per metric
    pub fn into_timeseries(self, labels: &[&str]) -> Result<TimeSeries> {
        self.expect_width(labels.len() + 1)?;

        let time = self.rows.iter().map(|r| r[0]).collect();
        let columns = (1..self.width)
            .map(|c| self.rows.iter().map(|r| r[c]).collect())
            .collect();
        let labels = labels.iter().map(|l| l.to_string()).collect();
        TimeSeries::new(time, labels, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let table = Table::new("t", vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column(1), Some(vec![2.0, 4.0]));
        assert_eq!(table.column(2), None);

        assert!(matches!(Table::new("t", vec![]), Err(Error::MalformedInput(_))));
        let ragged = Table::new("t", vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(ragged, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_conversions_check_width() {
        let table = Table::new("t", vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(table.clone().into_samples().is_err());
        assert!(table.clone().into_histogram().is_err());
        assert!(table.clone().into_timeseries(&["a"]).is_err());

        let rows = table.into_weighted_rows().unwrap();
        assert_eq!(rows, vec![(1.0, vec![2.0, 3.0])]);
    }

    #[test]
    fn test_into_timeseries() {
        let table = Table::new(
            "timeseries.dat",
            vec![vec![0.0, 10.0, 0.5], vec![100.0, 12.0, 0.25]],
        )
        .unwrap();
        let series = table.into_timeseries(&["species", "link density"]).unwrap();
        assert_eq!(series.time(), &[0.0, 100.0]);
        assert_eq!(series.column(0), Some(&[10.0, 12.0][..]));
        assert_eq!(series.labels()[1], "link density");
    }
}
