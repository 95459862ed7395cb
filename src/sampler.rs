//! Sampler
//!
//! Stratified resampling: class-proportional train/test splits and
//! stratified k-fold partitions. All randomness comes from the `StdRng`
//! passed in, so results are reproducible for a fixed seed.
use crate::data::{Dataset, Example};
use crate::errors::ArborError;
use crate::utils::{validate_min_usize_parameter, validate_ratio_parameter};
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Number of examples of a class of size `n` that go to the first side of
/// a split. Every class keeps at least one example on the first side and,
/// when it has more than one example, at least one on the second.
fn first_side_size(n: usize, ratio: f64) -> usize {
    if n <= 1 {
        return n;
    }
    let split = (n as f64 * ratio).round() as usize;
    split.clamp(1, n - 1)
}

/// Split `dataset` into two parts, `ratio` of each class going to the first.
///
/// Classes are processed in label order. Each class is shuffled with `rng`
/// before its first `round(ratio * size)` examples are taken.
pub fn stratified_split(dataset: &Dataset, ratio: f64, rng: &mut StdRng) -> Result<(Dataset, Dataset), ArborError> {
    validate_ratio_parameter(ratio, "ratio")?;

    let mut first: Vec<Example> = Vec::with_capacity(dataset.len());
    let mut second: Vec<Example> = Vec::with_capacity(dataset.len());
    for (label, mut examples) in dataset.group_by_class() {
        examples.shuffle(rng);
        let split = first_side_size(examples.len(), ratio);
        if split == examples.len() {
            warn!(
                "Class {} has {} example(s); none are left for the second partition.",
                label,
                examples.len()
            );
        }
        let rest = examples.split_off(split);
        first.extend(examples);
        second.extend(rest);
    }
    Ok((dataset.with_examples(first), dataset.with_examples(second)))
}

/// Partition `dataset` into `k` stratified folds.
///
/// Within each class the shuffled example at position `i` lands in fold
/// `i % k`, so the per-class fold sizes differ by at most one.
pub fn stratified_k_fold(dataset: &Dataset, k: usize, rng: &mut StdRng) -> Result<Vec<Dataset>, ArborError> {
    validate_min_usize_parameter(k, 2, "k_folds")?;

    let mut folds: Vec<Vec<Example>> = vec![Vec::new(); k];
    for (_, mut examples) in dataset.group_by_class() {
        examples.shuffle(rng);
        for (i, example) in examples.into_iter().enumerate() {
            folds[i % k].push(example);
        }
    }
    Ok(folds.into_iter().map(|f| dataset.with_examples(f)).collect())
}

/// Turn folds into `(train, validation)` pairs, where pair `i` validates on
/// fold `i` and trains on all the others.
pub fn cross_validation_pairs(folds: &[Dataset]) -> Vec<(Dataset, Dataset)> {
    folds
        .iter()
        .enumerate()
        .map(|(i, validation)| {
            let train: Vec<Example> = folds
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .flat_map(|(_, f)| f.examples.iter().cloned())
                .collect();
            (validation.with_examples(train), validation.clone())
        })
        .collect()
}
