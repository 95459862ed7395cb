//! Data
//!
//! In-memory representation of a categorical dataset: examples keyed by attribute
//! name, the ordered list of active attributes, the class attribute and any
//! declared attribute domains.
use crate::errors::ArborError;
use hashbrown::HashMap;
use std::collections::{BTreeMap, BTreeSet};

/// A single observation, mapping attribute names to categorical values.
/// The class attribute is stored alongside the regular attributes.
/// An attribute without an entry is considered missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example(HashMap<String, String>);

impl Example {
    pub fn new() -> Self {
        Example(HashMap::new())
    }

    /// Value of `attribute`, if present.
    #[inline]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.0.insert(attribute.into(), value.into());
    }

    /// Remove `attribute`, returning its value if it was present.
    pub fn remove(&mut self, attribute: &str) -> Option<String> {
        self.0.remove(attribute)
    }

    #[inline]
    pub fn is_missing(&self, attribute: &str) -> bool {
        !self.0.contains_key(attribute)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Example {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Example(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A view over a set of examples.
///
/// Views are never mutated while a tree is grown: restricting rows or dropping
/// the consumed split attribute always produces a new `Dataset`, so sibling
/// branches cannot observe each other's attribute lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// The examples in this view.
    pub examples: Vec<Example>,
    /// Attributes still available for splitting, in a stable order.
    pub attributes: Vec<String>,
    /// Name of the attribute holding the class label.
    pub class_attribute: String,
    /// Declared value domains. Attributes without a declaration infer their
    /// domain from the observed values.
    pub domains: HashMap<String, Vec<String>>,
}

impl Dataset {
    /// Create a dataset with no declared domains.
    pub fn new(attributes: Vec<String>, class_attribute: impl Into<String>, examples: Vec<Example>) -> Self {
        Dataset {
            examples,
            attributes,
            class_attribute: class_attribute.into(),
            domains: HashMap::new(),
        }
    }

    /// Declare the value domain for `attribute`.
    pub fn with_domain(mut self, attribute: impl Into<String>, values: Vec<String>) -> Self {
        self.domains.insert(attribute.into(), values);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Class label of `example`. Returns an empty label if the class is missing,
    /// which `validate` rules out for datasets handed to training.
    #[inline]
    pub fn label<'a>(&self, example: &'a Example) -> &'a str {
        example.get(&self.class_attribute).unwrap_or_default()
    }

    /// Check that every example has a value for the class attribute and
    /// every active attribute.
    pub fn validate(&self) -> Result<(), ArborError> {
        for (row, example) in self.examples.iter().enumerate() {
            let required = self.attributes.iter().chain(std::iter::once(&self.class_attribute));
            if let Some(attribute) = required.into_iter().find(|a| example.is_missing(a)) {
                return Err(ArborError::MissingValue {
                    row,
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of examples per class label, in label order.
    pub fn class_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for example in &self.examples {
            *counts.entry(self.label(example)).or_insert(0) += 1;
        }
        counts
    }

    /// Most frequent class label. Ties go to the lexicographically smallest
    /// label, so the result does not depend on example order.
    pub fn majority_class(&self) -> Option<String> {
        majority_of(&self.class_counts()).map(str::to_string)
    }

    /// True if all examples share one class label. An empty dataset is pure.
    pub fn is_pure(&self) -> bool {
        match self.examples.split_first() {
            None => true,
            Some((first, rest)) => {
                let label = self.label(first);
                rest.iter().all(|e| self.label(e) == label)
            }
        }
    }

    /// Distinct values of `attribute` in this view, sorted.
    pub fn observed_values(&self, attribute: &str) -> Vec<String> {
        self.examples
            .iter()
            .filter_map(|e| e.get(attribute))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Declared domain of `attribute`, falling back to the observed values.
    pub fn domain(&self, attribute: &str) -> Vec<String> {
        match self.domains.get(attribute) {
            Some(values) => values.clone(),
            None => self.observed_values(attribute),
        }
    }

    /// Class counts for every observed value of `attribute`.
    pub fn value_class_counts(&self, attribute: &str) -> BTreeMap<&str, BTreeMap<&str, usize>> {
        let mut counts: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
        for example in &self.examples {
            let value = example.get(attribute).unwrap_or_default();
            *counts
                .entry(value)
                .or_default()
                .entry(self.label(example))
                .or_insert(0) += 1;
        }
        counts
    }

    /// A view with the same schema over a different set of examples.
    pub fn with_examples(&self, examples: Vec<Example>) -> Dataset {
        Dataset {
            examples,
            attributes: self.attributes.clone(),
            class_attribute: self.class_attribute.clone(),
            domains: self.domains.clone(),
        }
    }

    /// A view with `attribute` removed from the active attribute list.
    pub fn without_attribute(&self, attribute: &str) -> Dataset {
        Dataset {
            examples: self.examples.clone(),
            attributes: self.attributes.iter().filter(|a| *a != attribute).cloned().collect(),
            class_attribute: self.class_attribute.clone(),
            domains: self.domains.clone(),
        }
    }

    /// Partition the examples by their value of `attribute`. Each partition
    /// is non-empty and has `attribute` removed from its active attributes.
    pub fn partition_by(&self, attribute: &str) -> BTreeMap<String, Dataset> {
        let remaining: Vec<String> = self.attributes.iter().filter(|a| *a != attribute).cloned().collect();
        let mut groups: BTreeMap<String, Vec<Example>> = BTreeMap::new();
        for example in &self.examples {
            let value = example.get(attribute).unwrap_or_default();
            groups.entry(value.to_string()).or_default().push(example.clone());
        }
        groups
            .into_iter()
            .map(|(value, examples)| {
                let view = Dataset {
                    examples,
                    attributes: remaining.clone(),
                    class_attribute: self.class_attribute.clone(),
                    domains: self.domains.clone(),
                };
                (value, view)
            })
            .collect()
    }

    /// Examples grouped by class label, in label order. Within a class the
    /// original example order is preserved.
    pub fn group_by_class(&self) -> BTreeMap<String, Vec<Example>> {
        let mut groups: BTreeMap<String, Vec<Example>> = BTreeMap::new();
        for example in &self.examples {
            groups.entry(self.label(example).to_string()).or_default().push(example.clone());
        }
        groups
    }
}

/// Key with the highest count, ties broken by the smallest key.
pub(crate) fn majority_of<'a>(counts: &BTreeMap<&'a str, usize>) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for (&label, &count) in counts {
        match best {
            Some((_, n)) if count <= n => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The four-example weather dataset used across the crate's tests.
    pub(crate) fn weather() -> Dataset {
        let rows = [
            ("sunny", "hot", "no"),
            ("sunny", "cool", "no"),
            ("overcast", "hot", "yes"),
            ("rain", "cool", "yes"),
        ];
        let examples = rows
            .iter()
            .map(|(o, t, c)| Example::from_iter([("outlook", *o), ("temperature", *t), ("play", *c)]))
            .collect();
        Dataset::new(vec!["outlook".to_string(), "temperature".to_string()], "play", examples)
    }

    #[test]
    fn test_class_counts_and_majority() {
        let ds = weather();
        let counts = ds.class_counts();
        assert_eq!(counts.get("no"), Some(&2));
        assert_eq!(counts.get("yes"), Some(&2));
        // 2-2 tie resolves to the smallest label.
        assert_eq!(ds.majority_class().as_deref(), Some("no"));
        assert!(!ds.is_pure());
    }

    #[test]
    fn test_majority_of_empty() {
        let ds = weather().with_examples(Vec::new());
        assert_eq!(ds.majority_class(), None);
        assert!(ds.is_pure());
    }

    #[test]
    fn test_partition_by_drops_attribute() {
        let ds = weather();
        let parts = ds.partition_by("outlook");
        assert_eq!(parts.keys().collect::<Vec<_>>(), vec!["overcast", "rain", "sunny"]);
        assert_eq!(parts["sunny"].len(), 2);
        for view in parts.values() {
            assert_eq!(view.attributes, vec!["temperature".to_string()]);
        }
        // The parent view keeps its attributes.
        assert_eq!(ds.attributes.len(), 2);
    }

    #[test]
    fn test_domain_falls_back_to_observed() {
        let ds = weather().with_domain("temperature", vec!["hot".into(), "mild".into(), "cool".into()]);
        assert_eq!(ds.domain("temperature").len(), 3);
        assert_eq!(ds.domain("outlook"), vec!["overcast", "rain", "sunny"]);
    }

    #[test]
    fn test_validate_reports_missing_value() {
        let mut ds = weather();
        ds.examples.push(Example::from_iter([("outlook", "rain"), ("play", "yes")]));
        match ds.validate() {
            Err(ArborError::MissingValue { row, attribute }) => {
                assert_eq!(row, 4);
                assert_eq!(attribute, "temperature");
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(weather().validate().is_ok());
    }
}
