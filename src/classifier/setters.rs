use crate::classifier::config::{PrePruning, PruningMode};
use crate::classifier::Classifier;

impl Classifier {
    // Set methods for parameters

    /// Set all pre-pruning rules at once.
    /// * `pre_pruning` - The stopping rules applied while growing.
    pub fn set_pre_pruning(mut self, pre_pruning: PrePruning) -> Self {
        self.cfg.pre_pruning = pre_pruning;
        self
    }

    /// Set the maximum depth (rule N).
    /// * `max_depth` - Depth at which nodes become leaves, `None` to disable.
    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.cfg.pre_pruning.max_depth = max_depth;
        self
    }

    /// Set the minimum number of examples to split (rule K).
    /// * `min_examples_to_split` - Nodes with fewer examples become leaves, `None` to disable.
    pub fn set_min_examples_to_split(mut self, min_examples_to_split: Option<usize>) -> Self {
        self.cfg.pre_pruning.min_examples_to_split = min_examples_to_split;
        self
    }

    /// Set the minimum information gain (rule G).
    /// * `min_information_gain` - Splits below this gain are not made, `None` to disable.
    pub fn set_min_information_gain(mut self, min_information_gain: Option<f64>) -> Self {
        self.cfg.pre_pruning.min_information_gain = min_information_gain;
        self
    }

    /// Set whether reduced-error pruning is used.
    /// * `use_post_pruning` - Prune against a held-out slice of the training data.
    pub fn set_post_pruning(mut self, use_post_pruning: bool) -> Self {
        self.cfg.use_post_pruning = use_post_pruning;
        self
    }

    /// Apply a parsed pruning mode.
    /// * `mode` - Which strategies to enable.
    pub fn set_pruning_mode(mut self, mode: PruningMode) -> Self {
        self.cfg = self.cfg.with_mode(mode);
        self
    }

    /// Set the train ratio of the train/test split.
    /// * `train_ratio` - Fraction of each class used for training.
    pub fn set_train_ratio(mut self, train_ratio: f64) -> Self {
        self.cfg.train_ratio = train_ratio;
        self
    }

    /// Set the validation fraction used by post-pruning.
    /// * `validation_fraction` - Fraction of the training data held out.
    pub fn set_validation_fraction(mut self, validation_fraction: f64) -> Self {
        self.cfg.validation_fraction = validation_fraction;
        self
    }

    /// Set the number of cross-validation folds.
    /// * `k_folds` - Number of folds, at least 2.
    pub fn set_k_folds(mut self, k_folds: usize) -> Self {
        self.cfg.k_folds = k_folds;
        self
    }

    /// Set the seed.
    /// * `seed` - Integer value used to seed all random sampling.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }
}
