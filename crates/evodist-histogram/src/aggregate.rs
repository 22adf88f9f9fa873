//! Folding weighted samples into bins

use crate::traits::BinStrategy;
use crate::types::{ColumnDistribution, Distribution};
use evodist_core::{Error, Result, Sample};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Accumulates sample weights per bin key using a [`BinStrategy`]
///
/// Samples with a value of zero or below are skipped. The result does not
/// depend on the order of the samples beyond floating point summation.
#[derive(Debug, Clone)]
pub struct HistogramAggregator<S> {
    strategy: S,
}

impl<S: BinStrategy> HistogramAggregator<S> {
    /// Create a new aggregator
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// The strategy in use
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Sum weights per bin
    ///
    /// Fails with [`Error::DegenerateDomain`] when no sample has a positive
    /// value, and with [`Error::MalformedInput`] on non-finite values or
    /// negative weights.
    #[instrument(skip(self, samples), fields(strategy = self.strategy.name(), n = samples.len()))]
    pub fn aggregate(&self, samples: &[Sample]) -> Result<Distribution> {
        let mut bins: BTreeMap<OrderedFloat<f64>, f64> = BTreeMap::new();
        let mut skipped = 0usize;

        for (index, sample) in samples.iter().enumerate() {
            check_sample(index, sample.value, sample.weight)?;

            match self.strategy.key(sample.value) {
                Some(key) => {
                    *bins.entry(OrderedFloat(key)).or_insert(0.0) += sample.weight;
                }
                None if sample.is_binnable() => {
                    return Err(unkeyable(self.strategy.name(), index, sample.value));
                }
                None => skipped += 1,
            }
        }

        if bins.is_empty() {
            return Err(Error::no_positive_samples(samples.len()));
        }

        debug!("Aggregated into {} bins, skipped {} non-positive samples", bins.len(), skipped);
        Ok(Distribution::new(bins, self.strategy.axis()))
    }

    /// Sum each weight column independently per bin
    ///
    /// Every row is `(value, weights)`; all rows must carry the same number
    /// of weights.
    #[instrument(skip(self, rows), fields(strategy = self.strategy.name(), n = rows.len()))]
    pub fn aggregate_columns<R>(&self, rows: &[(f64, R)]) -> Result<ColumnDistribution>
    where
        R: AsRef<[f64]>,
    {
        let columns = match rows.first() {
            Some((_, weights)) => weights.as_ref().len(),
            None => return Err(Error::no_positive_samples(0)),
        };
        if columns == 0 {
            return Err(Error::MalformedInput(
                "rows carry no weight columns".to_string(),
            ));
        }

        let mut bins: BTreeMap<OrderedFloat<f64>, Vec<f64>> = BTreeMap::new();
        let mut skipped = 0usize;

        for (index, (value, weights)) in rows.iter().enumerate() {
            let weights = weights.as_ref();
            if weights.len() != columns {
                return Err(Error::MalformedInput(format!(
                    "row {index}: expected {columns} weight columns, got {}",
                    weights.len()
                )));
            }
            for &weight in weights {
                check_sample(index, *value, weight)?;
            }

            match self.strategy.key(*value) {
                Some(key) => {
                    let sums = bins
                        .entry(OrderedFloat(key))
                        .or_insert_with(|| vec![0.0; columns]);
                    for (sum, weight) in sums.iter_mut().zip(weights) {
                        *sum += weight;
                    }
                }
                None if *value > 0.0 => {
                    return Err(unkeyable(self.strategy.name(), index, *value));
                }
                None => skipped += 1,
            }
        }

        if bins.is_empty() {
            return Err(Error::no_positive_samples(rows.len()));
        }

        debug!("Aggregated {} columns into {} bins, skipped {} rows", columns, bins.len(), skipped);
        Ok(ColumnDistribution::new(bins, columns, self.strategy.axis()))
    }
}

fn unkeyable(strategy: &str, index: usize, value: f64) -> Error {
    Error::MalformedInput(format!(
        "sample {index} value {value} has no finite {strategy} bin key"
    ))
}

fn check_sample(index: usize, value: f64, weight: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::non_finite(&format!("sample {index} value")));
    }
    if !weight.is_finite() {
        return Err(Error::non_finite(&format!("sample {index} weight")));
    }
    if weight < 0.0 {
        return Err(Error::MalformedInput(format!(
            "sample {index} has negative weight {weight}"
        )));
    }
    Ok(())
}
