//! Pattern 2: Fan-In Aggregation
//!
//! Independent producer threads each sum one contiguous partition of the
//! input and send their partial result into one shared rendezvous
//! channel. The aggregator performs one blocking receive per producer
//! and combines by addition, so the arrival order never matters.

use crossbeam::channel::{bounded, Sender};
use std::thread;

/// Sums one partition and delivers the result on the shared channel.
/// The send parks this producer until the aggregator takes the value.
pub fn partial_sum(segment: &[i64], results: &Sender<i64>) {
    let sum = segment.iter().sum();
    results.send(sum).unwrap();
}

/// Splits `values` at the midpoint, sums both halves on their own
/// threads, and combines the two partial results.
///
/// The two receives complete in whichever order the producers finish;
/// addition is commutative, so the total is the same either way.
pub fn fan_in_sum(values: &[i64]) -> i64 {
    let (results_tx, results_rx) = bounded(0);
    let (front, back) = values.split_at(values.len() / 2);

    thread::scope(|s| {
        s.spawn(|| partial_sum(front, &results_tx));
        s.spawn(|| partial_sum(back, &results_tx));

        // Exactly two producers, exactly two receives.
        let (x, y) = (results_rx.recv().unwrap(), results_rx.recv().unwrap());
        x + y
    })
}

/// N-way generalization: one producer thread and one receive per
/// contiguous chunk. Short inputs may yield fewer chunks than
/// `partitions`; an empty input sums to 0.
pub fn fan_in_sum_n(values: &[i64], partitions: usize) -> i64 {
    assert!(partitions > 0, "need at least one partition");
    let chunk_len = values.len().div_ceil(partitions).max(1);
    let (results_tx, results_rx) = bounded(0);

    thread::scope(|s| {
        let mut producers = 0;
        for chunk in values.chunks(chunk_len) {
            let results = results_tx.clone();
            s.spawn(move || partial_sum(chunk, &results));
            producers += 1;
        }
        (0..producers).map(|_| results_rx.recv().unwrap()).sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rayon::prelude::*;

    #[test]
    fn test_worked_example_splits_and_combines() {
        let values = [7, 2, 8, -9, 4, 0];
        assert_eq!(fan_in_sum(&values), 12);
    }

    #[test]
    fn test_partials_arrive_in_either_order() {
        let values = [7, 2, 8, -9, 4, 0];
        let (tx, rx) = bounded(0);

        let (first, second) = thread::scope(|s| {
            s.spawn(|| partial_sum(&values[..3], &tx));
            s.spawn(|| partial_sum(&values[3..], &tx));
            (rx.recv().unwrap(), rx.recv().unwrap())
        });

        // Which partial lands first is scheduling luck; the pair is fixed.
        let mut partials = [first, second];
        partials.sort();
        assert_eq!(partials, [-5, 17]);
        assert_eq!(first + second, 12);
    }

    #[test]
    fn test_empty_input_sums_to_zero() {
        assert_eq!(fan_in_sum(&[]), 0);
        assert_eq!(fan_in_sum_n(&[], 3), 0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(fan_in_sum(&[42]), 42);
        assert_eq!(fan_in_sum_n(&[42], 4), 42);
    }

    #[test]
    fn test_matches_rayon_sum() {
        let data: Vec<i64> = (1..=1000).collect();
        let parallel: i64 = data.par_iter().sum();
        assert_eq!(fan_in_sum(&data), parallel);
        assert_eq!(parallel, 500500);
    }

    proptest! {
        #[test]
        fn test_fan_in_matches_sequential(
            values in prop::collection::vec(-1_000i64..=1_000, 0..=64),
        ) {
            prop_assert_eq!(fan_in_sum(&values), values.iter().sum::<i64>());
        }

        #[test]
        fn test_any_contiguous_split_covers_the_input(
            values in prop::collection::vec(-1_000i64..=1_000, 0..=64),
            cut in 0usize..=64,
        ) {
            let cut = cut.min(values.len());
            let (tx, rx) = bounded(0);

            let total = thread::scope(|s| {
                s.spawn(|| partial_sum(&values[..cut], &tx));
                s.spawn(|| partial_sum(&values[cut..], &tx));
                rx.recv().unwrap() + rx.recv().unwrap()
            });

            prop_assert_eq!(total, values.iter().sum::<i64>());
        }

        #[test]
        fn test_n_way_matches_sequential(
            values in prop::collection::vec(-1_000i64..=1_000, 0..=48),
            partitions in 1usize..=5,
        ) {
            prop_assert_eq!(
                fan_in_sum_n(&values, partitions),
                values.iter().sum::<i64>()
            );
        }
    }
}
