use crate::classifier::config::Config;
use crate::classifier::report::EvaluationReport;
use crate::data::Dataset;
use crate::errors::ArborError;
use crate::metric::mean_std;
use crate::sampler::{cross_validation_pairs, stratified_k_fold, stratified_split};
use crate::tree::DecisionTree;
use crate::utils::fmt_vec_output;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trains decision trees under a fixed [`Config`] and evaluates them with a
/// stratified train/test split and stratified k-fold cross-validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Classifier {
    pub cfg: Config,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier { cfg: Config::default() }
    }
}

impl Classifier {
    /// Create a classifier, rejecting invalid configurations.
    pub fn new(cfg: Config) -> Result<Self, ArborError> {
        let classifier = Classifier { cfg };
        classifier.validate_parameters()?;
        Ok(classifier)
    }

    pub fn validate_parameters(&self) -> Result<(), ArborError> {
        self.cfg.validate()
    }

    /// Train a tree on `train`.
    ///
    /// With post-pruning enabled, `train` is first split (stratified) into a
    /// sub-training set holding `1 - validation_fraction` of each class and a
    /// validation set; the tree is grown on the former and pruned against the
    /// latter. Otherwise the tree is grown on all of `train`.
    pub fn train(&self, train: &Dataset, rng: &mut StdRng) -> Result<DecisionTree, ArborError> {
        self.validate_parameters()?;
        let mut tree = DecisionTree::new();
        if self.cfg.use_post_pruning {
            let (subtrain, validation) = stratified_split(train, 1.0 - self.cfg.validation_fraction, rng)?;
            tree.fit(&subtrain, &self.cfg.pre_pruning)?;
            tree.prune(&validation)?;
        } else {
            tree.fit(train, &self.cfg.pre_pruning)?;
        }
        Ok(tree)
    }

    /// Stratified k-fold cross-validation on `dataset`, returning the
    /// accuracy on each validation fold.
    ///
    /// Each fold trains with its own generator seeded from `rng`, so fold
    /// results do not depend on the order the folds are run in.
    pub fn cross_validate(&self, dataset: &Dataset, rng: &mut StdRng) -> Result<Vec<f64>, ArborError> {
        self.validate_parameters()?;
        let folds = stratified_k_fold(dataset, self.cfg.k_folds, rng)?;
        let seeds: Vec<u64> = (0..folds.len()).map(|_| rng.gen()).collect();

        let mut accuracies = Vec::with_capacity(folds.len());
        for (i, ((train, validation), seed)) in cross_validation_pairs(&folds).into_iter().zip(seeds).enumerate() {
            if train.is_empty() {
                warn!("Fold {} has no training examples; scoring it as 0.", i + 1);
                accuracies.push(0.0);
                continue;
            }
            let mut fold_rng = StdRng::seed_from_u64(seed);
            let tree = self.train(&train, &mut fold_rng)?;
            let accuracy = tree.score(&validation)?;
            info!(
                "Fold {}: {} train / {} validation examples, accuracy {:.4}",
                i + 1,
                train.len(),
                validation.len(),
                accuracy
            );
            accuracies.push(accuracy);
        }
        info!("Fold accuracies: {}", fmt_vec_output(&accuracies));
        Ok(accuracies)
    }

    /// Run the full evaluation protocol on `dataset`.
    ///
    /// The data is split into train and test sets, a tree is trained on the
    /// training set and scored on it, cross-validation is run on the
    /// training set, and the same tree is finally scored on the test set.
    /// All randomness is derived from `cfg.seed`.
    pub fn evaluate(&self, dataset: &Dataset) -> Result<(DecisionTree, EvaluationReport), ArborError> {
        self.validate_parameters()?;
        if dataset.is_empty() {
            return Err(ArborError::EmptyDataset);
        }
        dataset.validate()?;

        let mut rng = StdRng::seed_from_u64(self.cfg.seed);
        let (train, test) = stratified_split(dataset, self.cfg.train_ratio, &mut rng)?;
        info!("Split {} examples into {} train / {} test.", dataset.len(), train.len(), test.len());

        let tree = self.train(&train, &mut rng)?;
        let train_accuracy = tree.score(&train)?;

        let fold_accuracies = self.cross_validate(&train, &mut rng)?;
        let (mean_fold_accuracy, std_fold_accuracy) = mean_std(&fold_accuracies);

        let test_accuracy = tree.score(&test)?;

        let report = EvaluationReport {
            train_accuracy,
            fold_accuracies,
            mean_fold_accuracy,
            std_fold_accuracy,
            test_accuracy,
        };
        Ok((tree, report))
    }
}
