//! Prune
//!
//! Reduced-error pruning of a grown tree against a held-out validation set.
use crate::data::{Dataset, Example};
use crate::errors::ArborError;
use crate::node::Node;
use crate::tree::DecisionTree;
use log::info;

impl DecisionTree {
    /// Replace subtrees with majority-class leaves wherever that does not
    /// lower accuracy on `validation`.
    pub fn prune(&mut self, validation: &Dataset) -> Result<(), ArborError> {
        let root = self.root.take().ok_or(ArborError::UntrainedModel)?;
        let old_n_nodes = root.n_nodes();
        let root = prune(root, validation);
        info!("Pruned nodes: {} -> {}", old_n_nodes, root.n_nodes());
        self.root = Some(root);
        Ok(())
    }
}

/// Bottom-up reduced-error pruning of `node` against `validation`.
///
/// Children are pruned first. An internal node is then collapsed into a
/// leaf carrying its majority class if the leaf gets at least as many
/// validation examples right as the subtree does; ties favour the leaf.
pub fn prune(mut node: Node, validation: &Dataset) -> Node {
    let reaching: Vec<&Example> = validation.examples.iter().collect();
    prune_node(&mut node, &reaching, validation);
    node
}

// Collapsing a node only changes predictions for the validation examples
// routed to it, so comparing correct counts on `reaching` orders the two
// candidates exactly as whole-tree validation accuracy would.
fn prune_node(node: &mut Node, reaching: &[&Example], validation: &Dataset) {
    let majority = match node {
        Node::Leaf(_) => return,
        Node::Internal(internal) => {
            for (value, child) in internal.children.iter_mut() {
                let routed: Vec<&Example> = reaching
                    .iter()
                    .copied()
                    .filter(|e| e.get(&internal.attribute) == Some(value.as_str()))
                    .collect();
                prune_node(child, &routed, validation);
            }
            internal.majority_class.clone()
        }
    };

    let subtree_correct = reaching
        .iter()
        .filter(|e| node.predict(e) == validation.label(e))
        .count();
    let leaf_correct = reaching.iter().filter(|e| validation.label(e) == majority).count();

    if leaf_correct >= subtree_correct {
        node.collapse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::config::PrePruning;
    use crate::data::tests::weather;
    use crate::metric::accuracy;
    use crate::node::TreeStopper;

    fn fitted() -> DecisionTree {
        let mut tree = DecisionTree::new();
        tree.fit(&weather(), &PrePruning::none()).unwrap();
        tree
    }

    #[test]
    fn test_prune_keeps_useful_split() {
        let mut tree = fitted();
        let before = tree.clone();
        tree.prune(&weather()).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_prune_collapses_on_tie() {
        let mut tree = fitted();
        // Only "yes" examples in validation. The root's majority is "no" (2-2 tie),
        // so its leaf scores 0/2 against the subtree's 2/2.
        let ds = weather();
        let yes_only = ds.with_examples(ds.examples[2..].to_vec());
        tree.prune(&yes_only).unwrap();
        assert!(!tree.root.as_ref().unwrap().is_leaf());

        // With no validation examples every comparison ties and the tree collapses.
        let mut tree = fitted();
        tree.prune(&ds.with_examples(Vec::new())).unwrap();
        assert_eq!(tree.root, Some(Node::leaf("no", 0, TreeStopper::Pruned)));
    }

    #[test]
    fn test_prune_never_lowers_validation_accuracy() {
        let ds = weather();
        let validation = ds.with_examples(vec![ds.examples[0].clone(), ds.examples[3].clone()]);
        let tree = fitted();
        let before = accuracy(tree.root().unwrap(), &validation);
        let pruned = prune(tree.root.clone().unwrap(), &validation);
        assert!(accuracy(&pruned, &validation) >= before);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let ds = weather();
        let validation = ds.with_examples(vec![ds.examples[1].clone(), ds.examples[2].clone()]);
        let once = prune(fitted().root.unwrap(), &validation);
        let twice = prune(once.clone(), &validation);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_prune_unfitted() {
        let mut tree = DecisionTree::new();
        assert!(matches!(tree.prune(&weather()), Err(ArborError::UntrainedModel)));
    }
}
