//! Binning and density normalization for simulation observations
//!
//! This crate turns weighted samples (lifetimes, extinction sizes, ...) into
//! a compact, ascending distribution over bins, with each bin's weight
//! converted into a density that is comparable across bins of different
//! width.
//!
//! # Key Features
//!
//! - **Binning strategies**: fixed-width bins sized from the data maximum,
//!   and power-of-two bins keyed by upper or lower edge
//! - **One aggregation path**: [`HistogramAggregator`] and
//!   [`DensityNormalizer`] are shared by every [`BinStrategy`]
//! - **Multi-column tables**: several weight columns binned on one value
//! - **Pass-through shapes**: pre-binned histograms and time series
//!
//! # Examples
//!
//! ## Power-of-two bins
//!
//! ```rust
//! use evodist_histogram::{HistogramAggregator, DensityNormalizer, LogBinStrategy};
//! use evodist_core::Sample;
//!
//! let samples: Vec<Sample> = vec![(1.0, 3.0), (2.0, 1.0), (3.0, 2.0), (5.0, 4.0)]
//!     .into_iter()
//!     .map(Sample::from)
//!     .collect();
//!
//! let dist = HistogramAggregator::new(LogBinStrategy).aggregate(&samples).unwrap();
//! let density = DensityNormalizer::new().normalize(&dist);
//!
//! assert_eq!(density.to_xy(), vec![(1.0, 3.0), (2.0, 0.5), (4.0, 0.5), (8.0, 0.5)]);
//! ```
//!
//! ## Linear bins from a policy
//!
//! ```rust
//! use evodist_histogram::{density_distribution, BinningPolicy};
//! use evodist_core::Sample;
//!
//! let samples = vec![Sample::new(7.0, 2.0), Sample::new(250.0, 1.0)];
//! let density = density_distribution(&samples, BinningPolicy::linear()).unwrap();
//!
//! // Width is ceil(250 / 100) = 3, so 7 lands in the bin keyed 9
//! assert_eq!(density.keys(), vec![9.0, 252.0]);
//! ```

pub mod aggregate;
pub mod normalize;
pub mod series;
pub mod strategies;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use aggregate::HistogramAggregator;
pub use normalize::DensityNormalizer;
pub use series::{PreBinnedHistogram, TimeSeries};
pub use strategies::{
    Binning, BinningPolicy, FloorLogBinStrategy, LinearBinStrategy, LogBinStrategy,
    DEFAULT_TARGET_BINS,
};
pub use traits::BinStrategy;
pub use types::{
    ColumnDensities, ColumnDistribution, DensityDistribution, DensityPoint, DensityRow,
    Distribution,
};

pub use evodist_core::{Error, Result, Sample};

// Convenience functions
/// Bin samples under `policy` and normalize the bins into densities
pub fn density_distribution(samples: &[Sample], policy: BinningPolicy) -> Result<DensityDistribution> {
    let binning = policy.resolve(samples)?;
    let dist = HistogramAggregator::new(binning).aggregate(samples)?;
    Ok(DensityNormalizer::new().normalize(&dist))
}

/// Bin multi-column rows under `policy` and normalize every column
pub fn column_densities<R>(rows: &[(f64, R)], policy: BinningPolicy) -> Result<ColumnDensities>
where
    R: AsRef<[f64]>,
{
    let binning = policy.resolve_values(rows.iter().map(|(value, _)| *value))?;
    let dist = HistogramAggregator::new(binning).aggregate_columns(rows)?;
    Ok(DensityNormalizer::new().normalize_columns(&dist))
}
