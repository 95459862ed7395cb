pub mod predict;
pub mod tree;

pub use tree::DecisionTree;

// Unit-testing
#[cfg(test)]
mod tests {
    use crate::arff::read_arff;
    use crate::classifier::config::{ArborIO, PrePruning};
    use crate::data::tests::weather;
    use crate::data::{Dataset, Example};
    use crate::node::{Node, TreeStopper};
    use crate::tree::DecisionTree;

    fn play_tennis() -> Dataset {
        read_arff("resources/weather.arff").unwrap()
    }

    fn fitted(dataset: &Dataset, pre_pruning: &PrePruning) -> DecisionTree {
        let mut tree = DecisionTree::new();
        tree.fit(dataset, pre_pruning).unwrap();
        tree
    }

    fn assert_leaf(tree: &DecisionTree, label: &str, stopper: TreeStopper) {
        match tree.root().unwrap() {
            Node::Leaf(leaf) => {
                assert_eq!(leaf.label, label);
                assert_eq!(leaf.stopper, stopper);
            }
            other => panic!("expected a leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_tree_fit_weather() {
        let ds = weather();
        let tree = fitted(&ds, &PrePruning::none());
        match tree.root().unwrap() {
            Node::Internal(root) => {
                assert_eq!(root.attribute, "outlook");
                assert!((root.gain - 1.0).abs() < 1e-12);
                assert_eq!(root.children.len(), 3);
            }
            other => panic!("expected a split, got {:?}", other),
        }
        assert_eq!(tree.score(&ds).unwrap(), 1.0);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_tree_fit_play_tennis() {
        let ds = play_tennis();
        let tree = fitted(&ds, &PrePruning::none());
        match tree.root().unwrap() {
            Node::Internal(root) => {
                assert_eq!(root.attribute, "outlook");
                assert!(root.children["overcast"].is_leaf());
            }
            other => panic!("expected a split, got {:?}", other),
        }
        assert_eq!(tree.score(&ds).unwrap(), 1.0);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_tree_pure_dataset_is_leaf() {
        let ds = play_tennis();
        let yes: Vec<Example> = ds
            .examples
            .iter()
            .filter(|e| e.get("play") == Some("yes"))
            .cloned()
            .collect();
        let ds = ds.with_examples(yes);
        for pre in [PrePruning::none(), PrePruning::all()] {
            let tree = fitted(&ds, &pre);
            assert_leaf(&tree, "yes", TreeStopper::Pure);
        }
    }

    #[test]
    fn test_tree_max_depth() {
        let ds = play_tennis();
        let pre = PrePruning {
            max_depth: Some(0),
            ..PrePruning::none()
        };
        assert_leaf(&fitted(&ds, &pre), "yes", TreeStopper::MaxDepth);

        let pre = PrePruning {
            max_depth: Some(1),
            ..PrePruning::none()
        };
        let tree = fitted(&ds, &pre);
        assert_eq!(tree.depth(), 1);
        // sunny is 3 no / 2 yes and can no longer split.
        let sunny = Example::from_iter([("outlook", "sunny"), ("humidity", "normal")]);
        assert_eq!(tree.predict(&sunny).unwrap(), "no");
    }

    #[test]
    fn test_tree_min_examples() {
        let ds = play_tennis();
        let pre = PrePruning {
            min_examples_to_split: Some(15),
            ..PrePruning::none()
        };
        assert_leaf(&fitted(&ds, &pre), "yes", TreeStopper::MinExamples);

        let pre = PrePruning {
            min_examples_to_split: Some(14),
            ..PrePruning::none()
        };
        assert!(!fitted(&ds, &pre).root().unwrap().is_leaf());
    }

    #[test]
    fn test_tree_min_gain() {
        let ds = weather();
        let pre = PrePruning {
            min_information_gain: Some(1.1),
            ..PrePruning::none()
        };
        let tree = fitted(&ds, &pre);
        assert_leaf(&tree, "no", TreeStopper::MinGain);
        assert_eq!(tree.score(&ds).unwrap(), 0.5);
    }

    #[test]
    fn test_tree_unseen_value_uses_majority() {
        let tree = fitted(&play_tennis(), &PrePruning::none());
        let foggy = Example::from_iter([("outlook", "foggy")]);
        assert_eq!(tree.predict(&foggy).unwrap(), "yes");
        assert_eq!(tree.predict(&Example::new()).unwrap(), "yes");
    }

    #[test]
    fn test_tree_fit_is_deterministic() {
        let ds = play_tennis();
        let a = fitted(&ds, &PrePruning::all());
        let b = fitted(&ds, &PrePruning::all());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_tree_json_roundtrip() {
        let tree = fitted(&play_tennis(), &PrePruning::none());
        let json = tree.json_dump().unwrap();
        let loaded = DecisionTree::from_json(&json).unwrap();
        assert_eq!(tree, loaded);
    }

    #[test]
    fn test_tree_unfitted_and_empty() {
        let tree = DecisionTree::new();
        assert!(tree.predict(&Example::new()).is_err());
        assert_eq!(tree.to_string(), "<unfitted>\n");

        let empty = weather().with_examples(Vec::new());
        assert!(DecisionTree::new().fit(&empty, &PrePruning::none()).is_err());
    }
}
