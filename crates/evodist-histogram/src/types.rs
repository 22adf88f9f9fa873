//! Core types for binned distributions

use evodist_core::AxisScale;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Accumulated weight per bin key
///
/// Only bins that received at least one sample exist. Iteration is in
/// ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    bins: BTreeMap<OrderedFloat<f64>, f64>,
    axis: AxisScale,
}

impl Distribution {
    pub(crate) fn new(bins: BTreeMap<OrderedFloat<f64>, f64>, axis: AxisScale) -> Self {
        Self { bins, axis }
    }

    /// Number of non-empty bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the distribution has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Axis scale of the strategy that produced the keys
    pub fn axis(&self) -> AxisScale {
        self.axis
    }

    /// Weight accumulated in the bin with this key
    pub fn weight(&self, key: f64) -> Option<f64> {
        self.bins.get(&OrderedFloat(key)).copied()
    }

    /// Sum of all bin weights
    pub fn total_weight(&self) -> f64 {
        self.bins.values().sum()
    }

    /// Bin keys in ascending order
    pub fn keys(&self) -> Vec<f64> {
        self.bins.keys().map(|k| k.0).collect()
    }

    /// `(key, weight)` pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bins.iter().map(|(k, w)| (k.0, *w))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distribution({} bins, total weight={}, {} axis)",
            self.len(),
            self.total_weight(),
            self.axis
        )
    }
}

/// A single bin after normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityPoint {
    /// Bin key
    pub key: f64,
    /// Accumulated weight of the bin
    pub weight: f64,
    /// `weight / key`
    pub density: f64,
}

impl fmt::Display for DensityPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: weight={}, density={:.6}", self.key, self.weight, self.density)
    }
}

/// Final, ascending `(key, density)` sequence handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityDistribution {
    axis: AxisScale,
    points: Vec<DensityPoint>,
}

impl DensityDistribution {
    pub(crate) fn new(points: Vec<DensityPoint>, axis: AxisScale) -> Self {
        Self { axis, points }
    }

    /// The normalized bins
    pub fn points(&self) -> &[DensityPoint] {
        &self.points
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no bins
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis scale the keys should be displayed on
    pub fn axis(&self) -> AxisScale {
        self.axis
    }

    /// Get keys as a vector
    pub fn keys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.key).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.density).collect()
    }

    /// Weights recovered as `density * key`
    pub fn reconstructed_weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.density * p.key).collect()
    }

    /// `(key, density)` pairs for plotting
    pub fn to_xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.key, p.density)).collect()
    }
}

impl fmt::Display for DensityDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{} {}", point.key, point.density)?;
        }
        Ok(())
    }
}

/// Per-column accumulated weights for multi-column tables
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDistribution {
    bins: BTreeMap<OrderedFloat<f64>, Vec<f64>>,
    columns: usize,
    axis: AxisScale,
}

impl ColumnDistribution {
    pub(crate) fn new(
        bins: BTreeMap<OrderedFloat<f64>, Vec<f64>>,
        columns: usize,
        axis: AxisScale,
    ) -> Self {
        Self { bins, columns, axis }
    }

    /// Number of non-empty bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if there are no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of weight columns per bin
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Axis scale of the strategy that produced the keys
    pub fn axis(&self) -> AxisScale {
        self.axis
    }

    /// Column sums for the bin with this key
    pub fn weights(&self, key: f64) -> Option<&[f64]> {
        self.bins.get(&OrderedFloat(key)).map(Vec::as_slice)
    }

    /// `(key, column sums)` in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.bins.iter().map(|(k, w)| (k.0, w.as_slice()))
    }
}

/// One normalized row of a multi-column table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityRow {
    pub key: f64,
    pub densities: Vec<f64>,
}

/// Ascending normalized rows of a multi-column table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDensities {
    axis: AxisScale,
    rows: Vec<DensityRow>,
}

impl ColumnDensities {
    pub(crate) fn new(rows: Vec<DensityRow>, axis: AxisScale) -> Self {
        Self { axis, rows }
    }

    /// The normalized rows
    pub fn rows(&self) -> &[DensityRow] {
        &self.rows
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Axis scale the keys should be displayed on
    pub fn axis(&self) -> AxisScale {
        self.axis
    }

    /// `(key, density)` pairs of a single column
    pub fn column_xy(&self, column: usize) -> Option<Vec<(f64, f64)>> {
        self.rows
            .iter()
            .map(|row| row.densities.get(column).map(|d| (row.key, *d)))
            .collect()
    }
}

impl fmt::Display for ColumnDensities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "{}", row.key)?;
            for density in &row.densities {
                write!(f, " {density}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
