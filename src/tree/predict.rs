use super::tree::DecisionTree;
use crate::data::{Dataset, Example};
use crate::errors::ArborError;
use crate::metric::accuracy;

impl DecisionTree {
    /// Predict the class label of a single example.
    pub fn predict(&self, example: &Example) -> Result<&str, ArborError> {
        Ok(self.root()?.predict(example))
    }

    /// Predict a label for every example in `dataset`, in order.
    pub fn predict_all(&self, dataset: &Dataset) -> Result<Vec<String>, ArborError> {
        let root = self.root()?;
        Ok(dataset.examples.iter().map(|e| root.predict(e).to_string()).collect())
    }

    /// Fraction of `dataset` the tree labels correctly.
    pub fn score(&self, dataset: &Dataset) -> Result<f64, ArborError> {
        Ok(accuracy(self.root()?, dataset))
    }
}
