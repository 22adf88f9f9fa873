//! Property-based tests for binning and normalization

use evodist_core::Sample;
use evodist_histogram::{
    BinStrategy, DensityNormalizer, HistogramAggregator, LinearBinStrategy, LogBinStrategy,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// Integer-valued weights keep the sums exact regardless of order
fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec((-50i32..5000, 0u32..1000), 1..200).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(v, w)| Sample::new(v as f64, w as f64))
            .collect()
    })
}

fn positive_max(samples: &[Sample]) -> Option<f64> {
    samples
        .iter()
        .filter(|s| s.value > 0.0)
        .map(|s| s.value)
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

proptest! {
    // Property: density * key recovers the weight of every sample mapped to the key
    #[test]
    fn prop_density_round_trips_to_weight(samples in samples_strategy()) {
        prop_assume!(samples.iter().any(|s| s.value > 0.0));

        let strategy = LogBinStrategy;
        let dist = HistogramAggregator::new(strategy).aggregate(&samples).unwrap();
        let density = DensityNormalizer::new().normalize(&dist);

        let reconstructed = density.reconstructed_weights();
        prop_assert_eq!(reconstructed.len(), density.len());
        for (key, weight) in density.keys().into_iter().zip(reconstructed) {
            let expected: f64 = samples
                .iter()
                .filter(|s| strategy.key(s.value) == Some(key))
                .map(|s| s.weight)
                .sum();
            prop_assert!((weight - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }

    // Property: every value in (2^(k-1), 2^k] shares the key 2^k
    #[test]
    fn prop_log_bins_group_by_power_of_two(k in -10i32..40, a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let upper = 2f64.powi(k);
        let lower = upper / 2.0;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // Map [0, 1) onto (lower, upper]
        let v1 = upper - lo * (upper - lower);
        let v2 = upper - hi * (upper - lower);
        prop_assume!(v1 > lower && v2 > lower);

        prop_assert_eq!(LogBinStrategy.key(v1), Some(upper));
        prop_assert_eq!(LogBinStrategy.key(v2), Some(upper));
    }

    // Property: linear keys never decrease as values grow
    #[test]
    fn prop_linear_is_monotonic(max in 1.0f64..1e6, bins in 1usize..500, a in 1e-6f64..1e6, b in 1e-6f64..1e6) {
        let strategy = LinearBinStrategy::from_max(max, bins).unwrap();
        let (v1, v2) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(strategy.key(v1).unwrap() <= strategy.key(v2).unwrap());
    }

    // Property: the bin holding max covers it and is at most one width past it
    #[test]
    fn prop_linear_covers_maximum(max in 1e-3f64..1e6, bins in 1usize..500) {
        let strategy = LinearBinStrategy::from_max(max, bins).unwrap();
        let key = strategy.key(max).unwrap();
        prop_assert!(key >= max);
        prop_assert!(key < max + strategy.width());
    }

    // Property: for whole-number maxima the last bin is within target_bins widths
    #[test]
    fn prop_linear_last_bin_within_target(max in 1u32..1_000_000, bins in 1usize..500) {
        let max = max as f64;
        let strategy = LinearBinStrategy::from_max(max, bins).unwrap();
        let key = strategy.key(max).unwrap();
        prop_assert!(key <= bins as f64 * strategy.width());
    }

    // Property: non-positive samples never create or feed a bin
    #[test]
    fn prop_non_positive_values_excluded(samples in samples_strategy()) {
        prop_assume!(samples.iter().any(|s| s.value > 0.0));

        let max = positive_max(&samples).unwrap();
        let strategy = LinearBinStrategy::from_max(max, 100).unwrap();
        let dist = HistogramAggregator::new(strategy).aggregate(&samples).unwrap();

        let positive_weight: f64 = samples.iter().filter(|s| s.value > 0.0).map(|s| s.weight).sum();
        prop_assert_eq!(dist.total_weight(), positive_weight);
        prop_assert!(dist.keys().iter().all(|&k| k > 0.0));
    }

    // Property: aggregation ignores sample order
    #[test]
    fn prop_aggregation_is_order_independent(samples in samples_strategy(), seed in any::<u64>()) {
        prop_assume!(samples.iter().any(|s| s.value > 0.0));

        let mut shuffled = samples.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        let aggregator = HistogramAggregator::new(LogBinStrategy);
        let first = aggregator.aggregate(&samples).unwrap();
        let second = aggregator.aggregate(&shuffled).unwrap();
        let again = aggregator.aggregate(&samples).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &again);
    }

    // Property: output is strictly ascending with one point per bin
    #[test]
    fn prop_output_strictly_ascending(samples in samples_strategy()) {
        prop_assume!(samples.iter().any(|s| s.value > 0.0));

        let dist = HistogramAggregator::new(LogBinStrategy).aggregate(&samples).unwrap();
        let density = DensityNormalizer::new().normalize(&dist);

        prop_assert_eq!(density.len(), dist.len());
        prop_assert!(density.keys().windows(2).all(|w| w[0] < w[1]));
    }
}
