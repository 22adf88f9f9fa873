//! Rendering of binned distributions, pre-binned histograms and time series
//!
//! Charts are described with [`Chart`] and [`Figure`] and drawn by a
//! [`DistributionRenderer`]. [`PngRenderer`] writes PNG images through the
//! `plotters` bitmap backend.
//!
//! The x axis of a density chart follows the binning strategy (linear bins on
//! a linear axis, power-of-two bins on a logarithmic one); the y axis is
//! always logarithmic.
//!
//! # Example
//!
//! ```rust,no_run
//! use evodist_core::Sample;
//! use evodist_histogram::{density_distribution, BinningPolicy};
//! use evodist_viz::{Chart, DistributionRenderer, PngRenderer};
//! use std::path::Path;
//!
//! let samples = vec![Sample::new(1.0, 3.0), Sample::new(5.0, 4.0)];
//! let density = density_distribution(&samples, BinningPolicy::Log).unwrap();
//! let chart = Chart::density("lifetime", "lifetime", &density);
//!
//! PngRenderer::default()
//!     .render(&chart.into(), Path::new("lifetime_logbin.png"))
//!     .unwrap();
//! ```

pub mod chart;
pub mod config;
pub mod renderer;

pub use chart::{axis_range, Chart, Figure, Series};
pub use config::RenderConfig;
pub use renderer::{DistributionRenderer, PngRenderer};
