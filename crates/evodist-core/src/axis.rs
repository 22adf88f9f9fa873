//! Axis scale shared between binning and rendering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale of a plot axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Evenly spaced values
    #[default]
    Linear,
    /// Evenly spaced decades; only positive values are representable
    Logarithmic,
}

impl AxisScale {
    /// Whether `value` can be placed on an axis of this scale
    pub fn accepts(&self, value: f64) -> bool {
        match self {
            Self::Linear => value.is_finite(),
            Self::Logarithmic => value.is_finite() && value > 0.0,
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Logarithmic => f.write_str("log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(AxisScale::Linear.accepts(0.0));
        assert!(AxisScale::Linear.accepts(-3.0));
        assert!(!AxisScale::Linear.accepts(f64::NAN));
        assert!(AxisScale::Logarithmic.accepts(1e-9));
        assert!(!AxisScale::Logarithmic.accepts(0.0));
        assert!(!AxisScale::Logarithmic.accepts(f64::INFINITY));
    }
}
