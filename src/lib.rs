//! # evodist
//!
//! Binned density distributions and plots for the outputs of a species
//! extinction simulation.
//!
//! The workspace is split into:
//! - [`evodist_core`]: samples, axis scales and the error type
//! - [`evodist_histogram`]: binning strategies, aggregation and density normalization
//! - [`evodist_io`]: reading whitespace-separated simulator tables
//! - [`evodist_viz`]: chart descriptions and PNG rendering
//!
//! This crate wires them into the pipelines behind the `evodist` binary.
//!
//! ## Quick start
//!
//! ```rust
//! use evodist::prelude::*;
//!
//! let samples = vec![Sample::new(1.0, 3.0), Sample::new(3.0, 2.0)];
//! let density = density_distribution(&samples, BinningPolicy::Log).unwrap();
//! assert_eq!(density.keys(), vec![1.0, 4.0]);
//! ```

pub mod cli;
pub mod commands;
pub mod datasets;

pub use commands::{bin_columns, OutputFormat, Pipeline};
pub use datasets::Dataset;

// Re-export workspace crates
pub use evodist_core as core;
pub use evodist_histogram as histogram;
pub use evodist_io as io;
pub use evodist_viz as viz;

/// Commonly used items
pub mod prelude {
    pub use evodist_core::{AxisScale, Error, Result, Sample};
    pub use evodist_histogram::{
        column_densities, density_distribution, BinStrategy, BinningPolicy, DensityDistribution,
        DensityNormalizer, HistogramAggregator,
    };
    pub use evodist_io::{TableFormat, TableReader};
    pub use evodist_viz::{Chart, DistributionRenderer, Figure, PngRenderer, RenderConfig};
}
