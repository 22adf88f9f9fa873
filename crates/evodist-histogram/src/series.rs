//! Data shapes that bypass binning
//!
//! Pre-aggregated histograms and time series go straight to the renderer.
//! They only guarantee that input order and column alignment are kept.

use evodist_core::{Error, Result};
use serde::Serialize;

/// A histogram that was already aggregated upstream, e.g. species diversity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreBinnedHistogram {
    points: Vec<(f64, f64)>,
}

impl PreBinnedHistogram {
    /// Wrap `(size, frequency)` pairs, keeping their order
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Error::non_finite("histogram rows"));
        }
        Ok(Self { points })
    }

    /// The `(size, frequency)` pairs in input order
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no rows
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Several metrics sampled at increasing times
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    time: Vec<f64>,
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TimeSeries {
    /// Build a series from a time column and one column per label
    ///
    /// Every column must have as many entries as `time`, and `time` must never
    /// decrease.
    pub fn new(time: Vec<f64>, labels: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        if labels.len() != columns.len() {
            return Err(Error::InvalidParameter(format!(
                "{} labels for {} metric columns",
                labels.len(),
                columns.len()
            )));
        }
        if let Some((i, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != time.len())
        {
            return Err(Error::MalformedInput(format!(
                "metric '{}' has {} entries, time index has {}",
                labels[i],
                column.len(),
                time.len()
            )));
        }
        if time.iter().chain(columns.iter().flatten()).any(|v| !v.is_finite()) {
            return Err(Error::non_finite("time series"));
        }
        if let Some(step) = time.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::MalformedInput(format!(
                "time index decreases at row {}",
                step + 2
            )));
        }

        Ok(Self { time, labels, columns })
    }

    /// Divide the time index by `divisor`, e.g. 1000 to plot thousands of steps
    pub fn rescale_time(mut self, divisor: f64) -> Result<Self> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "time divisor must be positive and finite, got {divisor}"
            )));
        }
        for t in &mut self.time {
            *t /= divisor;
        }
        Ok(self)
    }

    /// The time index
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Metric names, in column order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of time steps
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Check if there are no time steps
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Values of a single metric
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// `(time, value)` pairs of a single metric
    pub fn column_xy(&self, index: usize) -> Option<Vec<(f64, f64)>> {
        self.column(index)
            .map(|values| self.time.iter().copied().zip(values.iter().copied()).collect())
    }
}
