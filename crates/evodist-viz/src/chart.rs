//! Chart descriptions, independent of any drawing backend

use evodist_core::AxisScale;
use evodist_histogram::{DensityDistribution, PreBinnedHistogram};
use serde::Serialize;
use tracing::warn;

/// One labelled line of `(x, y)` points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// A single set of axes with one or more series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub series: Vec<Series>,
}

impl Chart {
    /// Empty chart with linear axes
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            series: Vec::new(),
        }
    }

    /// Density plot: x follows the binning, y is always logarithmic
    pub fn density(
        title: impl Into<String>,
        x_label: impl Into<String>,
        distribution: &DensityDistribution,
    ) -> Self {
        Self::new(title)
            .x_label(x_label)
            .y_label("frequency")
            .x_scale(distribution.axis())
            .y_scale(AxisScale::Logarithmic)
            .series(Series::new("density", distribution.to_xy()))
    }

    /// Histogram aggregated upstream: linear x, logarithmic y
    pub fn pre_binned(
        title: impl Into<String>,
        x_label: impl Into<String>,
        histogram: &PreBinnedHistogram,
    ) -> Self {
        Self::new(title)
            .x_label(x_label)
            .y_label("frequency")
            .y_scale(AxisScale::Logarithmic)
            .series(Series::new("frequency", histogram.points().to_vec()))
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = scale;
        self
    }

    pub fn y_scale(mut self, scale: AxisScale) -> Self {
        self.y_scale = scale;
        self
    }

    /// Add a series
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Series with points that cannot be shown on the chart's scales removed
    ///
    /// Zero or negative coordinates on a logarithmic axis are dropped with a
    /// warning rather than failing the whole plot.
    pub fn drawable_series(&self) -> Vec<Series> {
        self.series
            .iter()
            .map(|s| {
                let points: Vec<(f64, f64)> = s
                    .points
                    .iter()
                    .copied()
                    .filter(|&(x, y)| self.x_scale.accepts(x) && self.y_scale.accepts(y))
                    .collect();
                let dropped = s.points.len() - points.len();
                if dropped > 0 {
                    warn!(
                        "Dropping {} of {} points of '{}' that cannot be drawn on {}/{} axes",
                        dropped,
                        s.points.len(),
                        s.label,
                        self.x_scale,
                        self.y_scale
                    );
                }
                Series::new(s.label.clone(), points)
            })
            .collect()
    }
}

/// Several charts stacked vertically in one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub panels: Vec<Chart>,
}

impl Figure {
    pub fn new(panels: Vec<Chart>) -> Self {
        Self { panels }
    }
}

impl From<Chart> for Figure {
    fn from(chart: Chart) -> Self {
        Self::new(vec![chart])
    }
}

/// Padded `[min, max]` covering `values` on an axis of the given scale
///
/// Returns `None` when there is nothing to cover. A single distinct value is
/// widened so the range is never empty.
pub fn axis_range<I>(values: I, scale: AxisScale) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|&v| scale.accepts(v))
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })?;

    let range = match scale {
        AxisScale::Linear => {
            let pad = if max > min {
                (max - min) * 0.05
            } else {
                min.abs().max(1.0) * 0.5
            };
            (min - pad, max + pad)
        }
        AxisScale::Logarithmic => {
            if max > min {
                (min / 1.5, max * 1.5)
            } else {
                (min / 2.0, max * 2.0)
            }
        }
    };
    Some(range)
}
