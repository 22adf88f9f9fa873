//! Weighted observations

use serde::{Deserialize, Serialize};

/// A single observation: a measured value and how many times it occurred
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Measured value (lifetime, extinction size, ...)
    pub value: f64,
    /// Multiplicity of `value`
    pub weight: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Whether this sample takes part in binning
    ///
    /// Rows with a value of zero or below are placeholders in the simulator
    /// output (species still alive, no extinction) and are never binned.
    pub fn is_binnable(&self) -> bool {
        self.value > 0.0
    }
}

impl From<(f64, f64)> for Sample {
    fn from((value, weight): (f64, f64)) -> Self {
        Self::new(value, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binnable() {
        assert!(Sample::new(1.0, 3.0).is_binnable());
        assert!(Sample::new(0.25, 1.0).is_binnable());
        assert!(!Sample::new(0.0, 3.0).is_binnable());
        assert!(!Sample::new(-2.0, 3.0).is_binnable());
        assert!(!Sample::new(f64::NAN, 1.0).is_binnable());
    }

    #[test]
    fn test_from_tuple() {
        let sample: Sample = (5.0, 4.0).into();
        assert_eq!(sample.value, 5.0);
        assert_eq!(sample.weight, 4.0);
    }
}
