//! Binning strategies
//!
//! Every strategy keys a bin by a single positive number:
//!
//! | Strategy | Key of `v` | Axis |
//! |---|---|---|
//! | [`LinearBinStrategy`] | `W * ceil(v / W)` (upper edge) | linear |
//! | [`LogBinStrategy`] | `2^ceil(log2 v)` (upper edge) | log |
//! | [`FloorLogBinStrategy`] | `2^floor(log2 v)` (lower edge) | log |

use crate::traits::BinStrategy;
use evodist_core::{AxisScale, Error, Result, Sample};
use serde::{Deserialize, Serialize};

/// Number of linear bins used when none is requested
pub const DEFAULT_TARGET_BINS: usize = 100;

// Exponent of the largest power of two an f64 can hold
const MAX_EXPONENT: f64 = f64::MAX_EXP as f64 - 1.0;

fn is_binnable(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

// Values near f64::MAX can round up past the largest finite key
fn finite_key(key: f64) -> Option<f64> {
    key.is_finite().then_some(key)
}

/// Fixed-width bins sized from the dataset maximum
///
/// The width is `ceil(max / target_bins)`, so it is a whole number and never
/// zero for a positive maximum, and the last bin covers `max` exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBinStrategy {
    width: f64,
}

impl LinearBinStrategy {
    /// Size bins so that `target_bins` of them cover `(0, max]`
    pub fn from_max(max: f64, target_bins: usize) -> Result<Self> {
        if target_bins == 0 {
            return Err(Error::InvalidParameter(
                "target bin count must be at least 1".to_string(),
            ));
        }
        if !max.is_finite() {
            return Err(Error::non_finite("maximum sample value"));
        }
        if max <= 0.0 {
            return Err(Error::DegenerateDomain(format!(
                "maximum sample value is {max}; linear bins need a positive maximum"
            )));
        }

        let width = (max / target_bins as f64).ceil();
        Ok(Self { width })
    }

    /// Use an explicit bin width
    pub fn with_width(width: f64) -> Result<Self> {
        if !is_binnable(width) {
            return Err(Error::InvalidParameter(format!(
                "bin width must be positive and finite, got {width}"
            )));
        }
        Ok(Self { width })
    }

    /// Width shared by every bin
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl BinStrategy for LinearBinStrategy {
    fn key(&self, value: f64) -> Option<f64> {
        if !is_binnable(value) {
            return None;
        }
        let key = self.width * (value / self.width).ceil();
        // Rounding in the division can land one bin short
        finite_key(if key < value { key + self.width } else { key })
    }

    fn axis(&self) -> AxisScale {
        AxisScale::Linear
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Power-of-two bins keyed by their upper edge
///
/// Values in `(2^(k-1), 2^k]` share key `2^k`; `1` maps to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogBinStrategy;

impl BinStrategy for LogBinStrategy {
    fn key(&self, value: f64) -> Option<f64> {
        if !is_binnable(value) {
            return None;
        }
        // log2 rounds near powers of two; fix up by one doubling either way
        let key = value.log2().ceil().min(MAX_EXPONENT).exp2();
        finite_key(if key < value {
            key * 2.0
        } else if key / 2.0 >= value {
            key / 2.0
        } else {
            key
        })
    }

    fn axis(&self) -> AxisScale {
        AxisScale::Logarithmic
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Power-of-two bins keyed by their lower edge
///
/// Values in `[2^k, 2^(k+1))` share key `2^k`. This is the binning used for
/// multi-column tables, where each key is the largest power of two not
/// exceeding the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloorLogBinStrategy;

impl BinStrategy for FloorLogBinStrategy {
    fn key(&self, value: f64) -> Option<f64> {
        if !is_binnable(value) {
            return None;
        }
        let key = value.log2().floor().min(MAX_EXPONENT).exp2();
        finite_key(if key > value {
            key / 2.0
        } else if key * 2.0 <= value {
            key * 2.0
        } else {
            key
        })
    }

    fn axis(&self) -> AxisScale {
        AxisScale::Logarithmic
    }

    fn name(&self) -> &'static str {
        "floor-log"
    }
}

/// The closed set of strategies, resolved for a concrete dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binning {
    Linear(LinearBinStrategy),
    Log(LogBinStrategy),
    FloorLog(FloorLogBinStrategy),
}

impl BinStrategy for Binning {
    fn key(&self, value: f64) -> Option<f64> {
        match self {
            Self::Linear(s) => s.key(value),
            Self::Log(s) => s.key(value),
            Self::FloorLog(s) => s.key(value),
        }
    }

    fn axis(&self) -> AxisScale {
        match self {
            Self::Linear(s) => s.axis(),
            Self::Log(s) => s.axis(),
            Self::FloorLog(s) => s.axis(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Linear(s) => s.name(),
            Self::Log(s) => s.name(),
            Self::FloorLog(s) => s.name(),
        }
    }
}

/// Which strategy to use, before looking at any data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinningPolicy {
    /// Fixed-width bins; the width depends on the dataset maximum
    Linear { target_bins: usize },
    /// Power-of-two bins keyed by upper edge
    Log,
    /// Power-of-two bins keyed by lower edge
    FloorLog,
}

impl Default for BinningPolicy {
    fn default() -> Self {
        Self::Log
    }
}

impl BinningPolicy {
    /// Linear binning with [`DEFAULT_TARGET_BINS`] bins
    pub fn linear() -> Self {
        Self::Linear {
            target_bins: DEFAULT_TARGET_BINS,
        }
    }

    /// Resolve into a concrete strategy for the given samples
    pub fn resolve(&self, samples: &[Sample]) -> Result<Binning> {
        self.resolve_values(samples.iter().map(|s| s.value))
    }

    /// Resolve into a concrete strategy for the given raw values
    ///
    /// Only linear binning inspects the values; it fails with
    /// [`Error::DegenerateDomain`] when none of them is positive.
    pub fn resolve_values<I>(&self, values: I) -> Result<Binning>
    where
        I: IntoIterator<Item = f64>,
    {
        match *self {
            Self::Linear { target_bins } => {
                let mut total = 0usize;
                let mut max: Option<f64> = None;
                for value in values {
                    total += 1;
                    if !value.is_finite() {
                        return Err(Error::non_finite("sample values"));
                    }
                    if value > 0.0 {
                        max = Some(max.map_or(value, |m| m.max(value)));
                    }
                }
                let max = max.ok_or_else(|| Error::no_positive_samples(total))?;
                Ok(Binning::Linear(LinearBinStrategy::from_max(max, target_bins)?))
            }
            Self::Log => Ok(Binning::Log(LogBinStrategy)),
            Self::FloorLog => Ok(Binning::FloorLog(FloorLogBinStrategy)),
        }
    }
}
