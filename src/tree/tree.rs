use crate::classifier::config::{ArborIO, PrePruning};
use crate::data::Dataset;
use crate::errors::ArborError;
use crate::node::{InternalNode, Node, TreeStopper};
use crate::splitter::best_split;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A categorical decision tree grown with ID3.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct DecisionTree {
    /// Root node, `None` until the tree is fitted.
    pub root: Option<Node>,
    /// Name of the class attribute the tree predicts.
    pub class_attribute: String,
}

impl DecisionTree {
    pub fn new() -> Self {
        DecisionTree::default()
    }

    /// Grow the tree on `dataset`, applying the `pre_pruning` stopping rules.
    pub fn fit(&mut self, dataset: &Dataset, pre_pruning: &PrePruning) -> Result<(), ArborError> {
        if dataset.is_empty() {
            return Err(ArborError::EmptyDataset);
        }
        dataset.validate()?;

        let root = build(dataset, pre_pruning, 0);
        info!(
            "Grew tree on {} examples: {} nodes, {} leaves, depth {}.",
            dataset.len(),
            root.n_nodes(),
            root.n_leaves(),
            root.max_depth()
        );
        self.root = Some(root);
        self.class_attribute = dataset.class_attribute.clone();
        Ok(())
    }

    /// The fitted root node.
    pub fn root(&self) -> Result<&Node, ArborError> {
        self.root.as_ref().ok_or(ArborError::UntrainedModel)
    }

    pub fn n_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, Node::n_nodes)
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::max_depth)
    }
}

impl ArborIO for DecisionTree {}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => writeln!(f, "<unfitted>"),
        }
    }
}

/// Recursively grow a subtree from a non-empty `dataset` at `depth`.
///
/// The stopping rules are checked in a fixed order and the first one that
/// applies wins:
/// 1. all examples share one label,
/// 2. `depth` reached the maximum depth (N),
/// 3. fewer examples than the split minimum (K),
/// 4. no attributes left,
/// 5. the best information gain is below the minimum gain (G).
///
/// Otherwise the node splits on the attribute with the highest gain and one
/// child is grown per observed value. Partitions are never empty, so an
/// empty dataset only reaches this function if a caller passes one, in
/// which case the leaf carries an empty label.
pub(crate) fn build(dataset: &Dataset, pre_pruning: &PrePruning, depth: usize) -> Node {
    if dataset.is_pure() {
        let label = dataset.examples.first().map(|e| dataset.label(e)).unwrap_or_default();
        return Node::leaf(label, depth, TreeStopper::Pure);
    }

    let majority = dataset.majority_class().unwrap_or_default();

    if pre_pruning.max_depth.is_some_and(|n| depth >= n) {
        return Node::leaf(majority, depth, TreeStopper::MaxDepth);
    }
    if pre_pruning.min_examples_to_split.is_some_and(|k| dataset.len() < k) {
        return Node::leaf(majority, depth, TreeStopper::MinExamples);
    }

    let split = match best_split(dataset) {
        Some(split) => split,
        None => return Node::leaf(majority, depth, TreeStopper::NoAttributes),
    };

    if pre_pruning.min_information_gain.is_some_and(|g| split.gain < g) {
        debug!(
            "Best gain {:.4} on {} is below the minimum at depth {}.",
            split.gain, split.attribute, depth
        );
        return Node::leaf(majority, depth, TreeStopper::MinGain);
    }

    debug!(
        "Splitting {} examples on {} (gain {:.4}) at depth {}.",
        dataset.len(),
        split.attribute,
        split.gain,
        depth
    );
    let children: BTreeMap<String, Node> = dataset
        .partition_by(&split.attribute)
        .into_iter()
        .map(|(value, subset)| (value, build(&subset, pre_pruning, depth + 1)))
        .collect();

    Node::Internal(InternalNode {
        attribute: split.attribute,
        children,
        majority_class: majority,
        depth,
        gain: split.gain,
    })
}
