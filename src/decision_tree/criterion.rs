//! Entropy and information gain over a subset of a [`Dataset`].
//!
//! A subset is a slice of row indices into the dataset,
//! so that recursive calls never copy instances.
//! Label counts are kept in a `BTreeMap`
//! so that the summation order, and hence every score,
//! is identical from run to run.
use std::collections::BTreeMap;

use crate::diagnostics::{Diagnostics, Warning};
use crate::sample::Dataset;


/// Returns the entropy (in bits) of the labels in `indices`.
///
/// Rows without `label` are reported and left out of the count.
/// A pure subset has entropy exactly `0.0`.
/// A subset without any labeled row also returns `0.0`,
/// although its entropy is undefined.
pub fn entropy<D>(
    sample:      &Dataset,
    indices:     &[usize],
    label:       &str,
    diagnostics: &mut D,
) -> f64
    where D: Diagnostics + ?Sized
{
    let mut counter: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in indices {
        match sample[i].get(label) {
            Some(y) => { *counter.entry(y).or_insert(0) += 1; },
            None => { diagnostics.warn(Warning::MissingLabel { row: i }); },
        }
    }

    let total = counter.values().sum::<usize>();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let mut entropy = 0f64;
    for count in counter.into_values() {
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }
    entropy
}


/// Returns the information gain of splitting `indices` by `feature`.
///
/// The weight of each partition is its size over `indices.len()`.
/// Rows without `feature` are reported and belong to no partition.
pub fn information_gain<D>(
    sample:      &Dataset,
    indices:     &[usize],
    feature:     &str,
    label:       &str,
    diagnostics: &mut D,
) -> f64
    where D: Diagnostics + ?Sized
{
    if indices.is_empty() { return 0f64; }

    let total = indices.len() as f64;
    let before = entropy(sample, indices, label, diagnostics);

    let after = partition(sample, indices, feature, diagnostics)
        .into_values()
        .map(|part| {
            let weight = part.len() as f64 / total;
            weight * entropy(sample, &part[..], label, diagnostics)
        })
        .sum::<f64>();

    before - after
}


/// Group `indices` by their value of `feature`.
/// Groups are keyed by value in ascending order,
/// rows within a group keep their relative order.
pub(crate) fn partition<'a, D>(
    sample:      &'a Dataset,
    indices:     &[usize],
    feature:     &str,
    diagnostics: &mut D,
) -> BTreeMap<&'a str, Vec<usize>>
    where D: Diagnostics + ?Sized
{
    let mut partitions: BTreeMap<&'a str, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        match sample[i].get(feature) {
            Some(value) => {
                partitions.entry(value).or_default().push(i);
            },
            None => {
                let feature = feature.to_string();
                diagnostics.warn(Warning::MissingFeatureValue { row: i, feature });
            },
        }
    }
    partitions
}
