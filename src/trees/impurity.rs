//! Impurity measures used to score candidate splits.
use std::collections::HashMap;

use crate::data::dataset::WholeNumber;

/// Occurrences of every label in `y`.
pub fn class_counts<T: WholeNumber>(y: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for label in y {
        *counts.entry(*label).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy of the label distribution, in nats.
///
/// Returns 0 for an empty slice or a slice holding a single class.
pub fn entropy<T: WholeNumber>(y: &[T]) -> f64 {
    entropy_from_counts(&class_counts(y))
}

/// Shannon entropy, in nats, of a label histogram. Zero counts are ignored.
pub fn entropy_from_counts<T: WholeNumber>(counts: &HashMap<T, usize>) -> f64 {
    // summed in count order so equal histograms give bit-identical entropies
    let mut nonzero: Vec<usize> = counts.values().copied().filter(|&c| c > 0).collect();
    nonzero.sort_unstable();
    let total: usize = nonzero.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    nonzero
        .into_iter()
        .map(|count| count as f64 / total)
        .map(|p| -p * p.ln())
        .sum()
}

/// Reduction in entropy obtained by splitting `parent` into `left` and `right`.
///
/// A split that leaves either side empty has no gain.
pub fn information_gain<T: WholeNumber>(parent: &[T], left: &[T], right: &[T]) -> f64 {
    split_gain(entropy(parent), &class_counts(left), &class_counts(right))
}

/// Information gain of a split given the parent's entropy and the label histograms of both sides.
pub fn split_gain<T: WholeNumber>(
    parent_entropy: f64,
    left: &HashMap<T, usize>,
    right: &HashMap<T, usize>,
) -> f64 {
    let num_left: usize = left.values().sum();
    let num_right: usize = right.values().sum();
    if num_left == 0 || num_right == 0 {
        return 0.0;
    }
    let num_samples = (num_left + num_right) as f64;
    let weight_left = num_left as f64 / num_samples;
    let weight_right = num_right as f64 / num_samples;

    let gain = parent_entropy
        - weight_left * entropy_from_counts(left)
        - weight_right * entropy_from_counts(right);
    // rounding can leave a zero gain slightly negative
    gain.max(0.0)
}

/// Most frequent label; among equally frequent labels the one appearing first in `y` wins.
pub fn most_common_label<T: WholeNumber>(y: &[T]) -> Option<T> {
    let counts = class_counts(y);
    let mut best: Option<(T, usize)> = None;
    for label in y {
        let count = counts[label];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((*label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Number of distinct labels in `y`.
pub fn num_classes<T: WholeNumber>(y: &[T]) -> usize {
    class_counts(y).len()
}
