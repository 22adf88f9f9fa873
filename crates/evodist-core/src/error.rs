//! Error types for evodist
//!
//! Provides a unified error type for all evodist crates. Every failure is
//! fatal to the run; nothing here is retried.

use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

/// Core error type for binning, loading and rendering
#[derive(Error, Debug)]
pub enum Error {
    /// Source file missing, empty, unparsable or with the wrong column count
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Nothing to bin: no positive sample values, or a zero maximum
    #[error("Degenerate domain: {0}")]
    DegenerateDomain(String),

    /// The renderer could not draw or write the output image
    #[error("Rendering failed: {0}")]
    Rendering(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a dataset without any positive value
    pub fn no_positive_samples(total: usize) -> Self {
        Self::DegenerateDomain(format!(
            "none of the {total} samples has a positive value"
        ))
    }

    /// Create an error for a file that cannot be opened or read
    pub fn unreadable(path: &Path, cause: impl Display) -> Self {
        Self::MalformedInput(format!("cannot read {}: {cause}", path.display()))
    }

    /// Create an error for a file with no data rows
    pub fn empty_source(source: &str) -> Self {
        Self::MalformedInput(format!("{source} contains no data rows"))
    }

    /// Create an error for a row with an unexpected number of columns
    pub fn column_mismatch(source: &str, line: u64, expected: usize, actual: usize) -> Self {
        Self::MalformedInput(format!(
            "{source}:{line}: expected {expected} columns, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::MalformedInput(format!("{context} contains NaN or infinite values"))
    }

    /// Wrap a failure reported by the drawing backend
    pub fn rendering(path: &Path, cause: impl Display) -> Self {
        Self::Rendering(format!("{}: {cause}", path.display()))
    }
}
