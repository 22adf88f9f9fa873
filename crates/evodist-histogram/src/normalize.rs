//! Density normalization
//!
//! Dividing a bin's weight by its key turns counts into rates comparable
//! across bins of different width. For power-of-two bins the key equals the
//! bin width; for linear bins it is proportional to the bin's position, which
//! keeps both plots on the same footing.

use crate::types::{
    ColumnDensities, ColumnDistribution, DensityDistribution, DensityPoint, DensityRow,
    Distribution,
};

/// Converts accumulated bin weights into densities
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityNormalizer;

impl DensityNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// `(key, weight / key)` for every bin, ascending by key
    pub fn normalize(&self, distribution: &Distribution) -> DensityDistribution {
        let points = distribution
            .iter()
            .map(|(key, weight)| DensityPoint {
                key,
                weight,
                density: weight / key,
            })
            .collect();
        DensityDistribution::new(points, distribution.axis())
    }

    /// Divide every column of every bin by the bin key
    pub fn normalize_columns(&self, distribution: &ColumnDistribution) -> ColumnDensities {
        let rows = distribution
            .iter()
            .map(|(key, weights)| DensityRow {
                key,
                densities: weights.iter().map(|w| w / key).collect(),
            })
            .collect();
        ColumnDensities::new(rows, distribution.axis())
    }
}
