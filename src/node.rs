use crate::data::Example;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A node of a categorical decision tree.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Node {
    /// Terminal node predicting a single class label.
    Leaf(LeafNode),
    /// Node routing examples to a child by their value of one attribute.
    Internal(InternalNode),
}

/// Why a node was turned into a leaf.
#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TreeStopper {
    /// Every example reaching the node had the same label.
    Pure,
    /// Pre-pruning rule N.
    MaxDepth,
    /// Pre-pruning rule K.
    MinExamples,
    /// No attributes left to split on.
    NoAttributes,
    /// Pre-pruning rule G.
    MinGain,
    /// Replaced by reduced-error pruning.
    Pruned,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LeafNode {
    pub label: String,
    /// Most frequent training label at this node. Equal to `label` for
    /// every leaf the builder creates.
    pub majority_class: String,
    pub depth: usize,
    pub stopper: TreeStopper,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct InternalNode {
    pub attribute: String,
    /// One child per attribute value observed in the training examples that
    /// reached this node. Values never observed here have no entry.
    pub children: BTreeMap<String, Node>,
    /// Prediction used when an example carries a value with no child.
    pub majority_class: String,
    pub depth: usize,
    /// Information gain of the split, kept for inspection.
    pub gain: f64,
}

impl Node {
    pub fn leaf(label: impl Into<String>, depth: usize, stopper: TreeStopper) -> Self {
        let label = label.into();
        Node::Leaf(LeafNode {
            majority_class: label.clone(),
            label,
            depth,
            stopper,
        })
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(l) => l.depth,
            Node::Internal(n) => n.depth,
        }
    }

    #[inline]
    pub fn majority_class(&self) -> &str {
        match self {
            Node::Leaf(l) => &l.majority_class,
            Node::Internal(n) => &n.majority_class,
        }
    }

    /// Predict the class label of `example`. Unseen or missing values at an
    /// internal node resolve to that node's majority class.
    pub fn predict<'a>(&'a self, example: &Example) -> &'a str {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return &leaf.label,
                Node::Internal(internal) => {
                    let child = example
                        .get(&internal.attribute)
                        .and_then(|value| internal.children.get(value));
                    match child {
                        Some(child) => node = child,
                        None => return &internal.majority_class,
                    }
                }
            }
        }
    }

    /// Replace this subtree with a leaf predicting its majority class.
    pub fn collapse(&mut self) {
        if let Node::Internal(internal) = self {
            *self = Node::leaf(internal.majority_class.clone(), internal.depth, TreeStopper::Pruned);
        }
    }

    /// Total number of nodes in the subtree.
    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(n) => 1 + n.children.values().map(Node::n_nodes).sum::<usize>(),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(n) => n.children.values().map(Node::n_leaves).sum(),
        }
    }

    /// Depth of the deepest node in the subtree.
    pub fn max_depth(&self) -> usize {
        match self {
            Node::Leaf(l) => l.depth,
            Node::Internal(n) => n.children.values().map(Node::max_depth).max().unwrap_or(n.depth),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Leaf(l) => writeln!(f, "{}[LEAF] {}", pad, l.label),
            Node::Internal(n) => {
                writeln!(f, "{}[{}] (maj={})", pad, n.attribute, n.majority_class)?;
                for (value, child) in &n.children {
                    writeln!(f, "{}  - {}:", pad, value)?;
                    child.fmt_indented(f, indent + 2)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Node {
        let mut children = BTreeMap::new();
        children.insert("sunny".to_string(), Node::leaf("no", 1, TreeStopper::Pure));
        children.insert("rain".to_string(), Node::leaf("yes", 1, TreeStopper::Pure));
        Node::Internal(InternalNode {
            attribute: "outlook".to_string(),
            children,
            majority_class: "yes".to_string(),
            depth: 0,
            gain: 1.0,
        })
    }

    #[test]
    fn test_predict_follows_children() {
        let tree = stump();
        let ex = Example::from_iter([("outlook", "sunny")]);
        assert_eq!(tree.predict(&ex), "no");
    }

    #[test]
    fn test_predict_unseen_value_falls_back() {
        let tree = stump();
        let unseen = Example::from_iter([("outlook", "overcast")]);
        assert_eq!(tree.predict(&unseen), "yes");
        let missing = Example::new();
        assert_eq!(tree.predict(&missing), "yes");
    }

    #[test]
    fn test_counts_and_collapse() {
        let mut tree = stump();
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.max_depth(), 1);
        tree.collapse();
        assert_eq!(tree, Node::leaf("yes", 0, TreeStopper::Pruned));
    }

    #[test]
    fn test_display_sorted_children() {
        let rendered = stump().to_string();
        let expected = "[outlook] (maj=yes)\n  - rain:\n    [LEAF] yes\n  - sunny:\n    [LEAF] no\n";
        assert_eq!(rendered, expected);
    }
}
