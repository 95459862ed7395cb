//! Impute
//!
//! Mode-by-class imputation of missing attribute values.
use crate::data::{majority_of, Dataset};
use log::debug;
use std::collections::BTreeMap;

/// Fill every missing value of an active attribute with the most frequent
/// value of that attribute among examples of the same class, falling back
/// to the attribute's most frequent value overall when the class never
/// observed it. Ties go to the smallest value. Examples without a class
/// label are left untouched. Returns the number of values filled in.
pub fn impute_mode_by_class(dataset: &mut Dataset) -> usize {
    let modes = class_modes(dataset);
    let global = global_modes(dataset);

    let mut filled = 0;
    let class_attribute = dataset.class_attribute.clone();
    for example in dataset.examples.iter_mut() {
        let Some(class) = example.get(&class_attribute).map(str::to_string) else {
            continue;
        };
        for attribute in &dataset.attributes {
            if !example.is_missing(attribute) {
                continue;
            }
            let mode = modes
                .get(&(class.clone(), attribute.clone()))
                .or_else(|| global.get(attribute));
            if let Some(mode) = mode {
                example.insert(attribute.clone(), mode.clone());
                filled += 1;
            }
        }
    }
    debug!("Imputed {} missing values.", filled);
    filled
}

fn class_modes(dataset: &Dataset) -> BTreeMap<(String, String), String> {
    let mut counts: BTreeMap<(String, String), BTreeMap<&str, usize>> = BTreeMap::new();
    for example in &dataset.examples {
        let Some(class) = example.get(&dataset.class_attribute) else {
            continue;
        };
        for attribute in &dataset.attributes {
            if let Some(value) = example.get(attribute) {
                *counts
                    .entry((class.to_string(), attribute.clone()))
                    .or_default()
                    .entry(value)
                    .or_insert(0) += 1;
            }
        }
    }
    counts
        .into_iter()
        .filter_map(|(key, c)| majority_of(&c).map(|m| (key, m.to_string())))
        .collect()
}

fn global_modes(dataset: &Dataset) -> BTreeMap<String, String> {
    dataset
        .attributes
        .iter()
        .filter_map(|attribute| {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for value in dataset.examples.iter().filter_map(|e| e.get(attribute)) {
                *counts.entry(value).or_insert(0) += 1;
            }
            majority_of(&counts).map(|m| (attribute.clone(), m.to_string()))
        })
        .collect()
}
