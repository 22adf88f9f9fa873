//! Loading simulator output tables
//!
//! The simulator writes plain text tables, one row per line, fields separated
//! by single spaces. Three row shapes are understood:
//!
//! - `(value, weight)` for lifetimes and extinction sizes that still need binning
//! - `(size, frequency)` for histograms that were aggregated upstream
//! - `(time, metric1, metric2, ..)` for time series
//!
//! Any problem with the file (missing, empty, a bad number, a row of the wrong
//! width) is reported as [`Error::MalformedInput`](evodist_core::Error) before
//! anything is binned or drawn.
//!
//! # Example
//!
//! ```rust
//! use evodist_io::{TableReader, TableFormat};
//!
//! let text = "1 3\n2 1\n3 2\n5 4\n";
//! let table = TableReader::new(TableFormat::default())
//!     .read_from(text.as_bytes(), "lifetime.dat")
//!     .unwrap();
//! let samples = table.into_samples().unwrap();
//! assert_eq!(samples.len(), 4);
//! ```

pub mod config;
pub mod reader;
pub mod table;

pub use config::TableFormat;
pub use reader::TableReader;
pub use table::Table;

pub use evodist_core::{Error, Result};
