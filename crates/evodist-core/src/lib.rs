//! Core types for evodist
//!
//! Shared by the histogram, io and viz crates:
//!
//! - [`Error`] / [`Result`]: the error taxonomy every stage reports through
//! - [`Sample`]: one weighted observation read from a simulator output file
//! - [`AxisScale`]: linear or logarithmic display scale
//!
//! # Example
//!
//! ```rust
//! use evodist_core::{Sample, AxisScale};
//!
//! let sample = Sample::new(3.0, 2.0);
//! assert!(sample.is_binnable());
//! assert!(!AxisScale::Logarithmic.accepts(0.0));
//! ```

pub mod axis;
pub mod error;
pub mod sample;

pub use axis::AxisScale;
pub use error::{Error, Result};
pub use sample::Sample;
