//! Metric
//!
//! Accuracy of a tree over a dataset and summary statistics for
//! cross-validation scores.
use crate::data::Dataset;
use crate::node::Node;

/// Fraction of examples in `dataset` whose predicted label matches their
/// class label. An empty dataset scores 0.
pub fn accuracy(node: &Node, dataset: &Dataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let correct = dataset
        .examples
        .iter()
        .filter(|e| node.predict(e) == dataset.label(e))
        .count();
    correct as f64 / dataset.len() as f64
}

/// Arithmetic mean and sample standard deviation (n - 1 denominator).
/// The deviation is 0 for fewer than two values; the mean of no values is 0.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, var.sqrt())
}
