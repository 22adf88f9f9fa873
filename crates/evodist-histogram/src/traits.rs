//! Core traits for binning

use evodist_core::AxisScale;

/// Maps a raw sample value to the key of the bin it falls in
///
/// A strategy only decides where a value lands; aggregation and density
/// normalization are shared by every strategy.
pub trait BinStrategy {
    /// Key of the bin containing `value`
    ///
    /// Returns `None` for values that are never binned (zero, negative,
    /// NaN or infinite) and for values whose key would not be a finite
    /// number.
    fn key(&self, value: f64) -> Option<f64>;

    /// Scale on which the keys are meant to be displayed
    fn axis(&self) -> AxisScale;

    /// Short name used in logs and output headers
    fn name(&self) -> &'static str;
}

impl<S: BinStrategy + ?Sized> BinStrategy for &S {
    fn key(&self, value: f64) -> Option<f64> {
        (**self).key(value)
    }

    fn axis(&self) -> AxisScale {
        (**self).axis()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
