mod node;

// Modules
pub mod arff;
pub mod classifier;
pub mod constants;
pub mod data;
pub mod errors;
pub mod impute;
pub mod metric;
pub mod prune;
pub mod sampler;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classifier::config::ArborIO;
pub use classifier::{Classifier, Config, EvaluationReport, PrePruning, PruningMode};
pub use data::{Dataset, Example};
pub use errors::ArborError;
pub use node::{InternalNode, LeafNode, Node, TreeStopper};
pub use tree::DecisionTree;
