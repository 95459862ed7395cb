//! Splitter
//!
//! Entropy and information-gain computations used to choose the attribute an
//! internal node splits on.
use crate::data::Dataset;
use std::collections::BTreeMap;

/// The attribute chosen for a split, together with its information gain.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub attribute: String,
    pub gain: f64,
}

/// Shannon entropy (base 2) of a label distribution given as counts.
/// Zero counts contribute nothing.
pub fn entropy_from_counts<'a, I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = &'a usize>,
{
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    counts
        .into_iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the class-label distribution of `dataset`.
pub fn entropy(dataset: &Dataset) -> f64 {
    let counts = dataset.class_counts();
    entropy_from_counts(counts.values(), dataset.len())
}

/// Weighted average entropy of the partitions induced by `attribute`.
pub fn conditional_entropy(dataset: &Dataset, attribute: &str) -> f64 {
    let n = dataset.len();
    if n == 0 {
        return 0.0;
    }
    weighted_entropy(&dataset.value_class_counts(attribute), n)
}

fn weighted_entropy(partitions: &BTreeMap<&str, BTreeMap<&str, usize>>, n: usize) -> f64 {
    partitions
        .values()
        .map(|class_counts| {
            let size: usize = class_counts.values().sum();
            (size as f64 / n as f64) * entropy_from_counts(class_counts.values(), size)
        })
        .sum()
}

/// Reduction in entropy obtained by splitting `dataset` on `attribute`.
pub fn information_gain(dataset: &Dataset, attribute: &str) -> f64 {
    entropy(dataset) - conditional_entropy(dataset, attribute)
}

/// Pick the active attribute with the greatest information gain.
/// Ties keep the attribute that comes first in `dataset.attributes`.
/// Returns `None` when no active attributes remain.
pub fn best_split(dataset: &Dataset) -> Option<SplitInfo> {
    let base = entropy(dataset);
    let n = dataset.len();
    let mut best: Option<SplitInfo> = None;
    for attribute in &dataset.attributes {
        let gain = if n == 0 {
            0.0
        } else {
            base - weighted_entropy(&dataset.value_class_counts(attribute), n)
        };
        let better = match &best {
            None => true,
            Some(current) => gain > current.gain,
        };
        if better {
            best = Some(SplitInfo {
                attribute: attribute.clone(),
                gain,
            });
        }
    }
    best
}
