use serde::{Deserialize, Serialize};
use std::fmt;

/// Accuracy figures produced by [`Classifier::evaluate`](crate::classifier::Classifier::evaluate).
/// All values are fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub train_accuracy: f64,
    pub fold_accuracies: Vec<f64>,
    pub mean_fold_accuracy: f64,
    /// Sample standard deviation of `fold_accuracies`.
    pub std_fold_accuracy: f64,
    pub test_accuracy: f64,
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "1. Train Set Accuracy:")?;
        writeln!(f, "    Accuracy: {:.2}%", self.train_accuracy * 100.0)?;
        writeln!(f)?;
        writeln!(f, "{}-Fold Cross-Validation Results:", self.fold_accuracies.len())?;
        writeln!(f)?;
        for (i, a) in self.fold_accuracies.iter().enumerate() {
            writeln!(f, "    Accuracy Fold {}: {:.2}%", i + 1, a * 100.0)?;
        }
        writeln!(f)?;
        writeln!(f, "    Average Accuracy: {:.2}%", self.mean_fold_accuracy * 100.0)?;
        writeln!(f, "    Standard Deviation: {:.2}%", self.std_fold_accuracy * 100.0)?;
        writeln!(f)?;
        writeln!(f, "2. Test Set Accuracy:")?;
        writeln!(f, "    Accuracy: {:.2}%", self.test_accuracy * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = EvaluationReport {
            train_accuracy: 1.0,
            fold_accuracies: vec![0.5, 0.75],
            mean_fold_accuracy: 0.625,
            std_fold_accuracy: 0.1768,
            test_accuracy: 0.8,
        };
        let text = report.to_string();
        assert!(text.starts_with("1. Train Set Accuracy:\n    Accuracy: 100.00%\n"));
        assert!(text.contains("2-Fold Cross-Validation Results:"));
        assert!(text.contains("    Accuracy Fold 2: 75.00%\n"));
        assert!(text.contains("    Average Accuracy: 62.50%\n"));
        assert!(text.ends_with("2. Test Set Accuracy:\n    Accuracy: 80.00%\n"));
    }
}
