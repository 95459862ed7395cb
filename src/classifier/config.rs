//! Classifier Configuration
//!
//! Defines the pruning policy and evaluation parameters used by the
//! [`Classifier`](crate::classifier::Classifier), and the parser for the
//! compact pruning-mode strings (`"0"`, `"1 E"`, `"2 NKG E"`, ...).
use crate::constants::{
    DEFAULT_K_FOLDS, DEFAULT_MAX_DEPTH, DEFAULT_MIN_EXAMPLES_TO_SPLIT, DEFAULT_MIN_INFORMATION_GAIN,
    DEFAULT_SEED, DEFAULT_TRAIN_RATIO, DEFAULT_VALIDATION_FRACTION,
};
use crate::errors::ArborError;
use crate::utils::{
    items_to_strings, validate_finite_float_parameter, validate_min_usize_parameter, validate_ratio_parameter,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Pre-pruning stopping rules. A rule set to `None` is disabled.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct PrePruning {
    /// Rule N: nodes at this depth or deeper become leaves.
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Rule K: nodes with fewer examples than this become leaves.
    #[serde(default)]
    pub min_examples_to_split: Option<usize>,
    /// Rule G: splits whose best information gain is below this become leaves.
    #[serde(default)]
    pub min_information_gain: Option<f64>,
}

impl PrePruning {
    /// No pre-pruning; trees grow until pure or out of attributes.
    pub fn none() -> Self {
        PrePruning::default()
    }

    /// All three rules enabled with the default thresholds.
    pub fn all() -> Self {
        PrePruning {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            min_examples_to_split: Some(DEFAULT_MIN_EXAMPLES_TO_SPLIT),
            min_information_gain: Some(DEFAULT_MIN_INFORMATION_GAIN),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_depth.is_some() || self.min_examples_to_split.is_some() || self.min_information_gain.is_some()
    }
}

/// Which pruning strategies are switched on.
///
/// Parsed from a mode digit followed by optional selectors:
/// * `"0"` all pre-pruning rules, no post-pruning.
/// * `"1"` post-pruning (`E`) only.
/// * `"2"` everything.
///
/// Selectors narrow the mode down, e.g. `"0 K"` enables only rule K and
/// `"2 NG E"` enables rules N and G plus post-pruning. A mode whose selectors
/// pick nothing it supports keeps everything it supports.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PruningMode {
    pub max_depth: bool,
    pub min_examples_to_split: bool,
    pub min_information_gain: bool,
    pub post_pruning: bool,
}

impl PruningMode {
    fn parse_error(s: &str) -> ArborError {
        ArborError::ParseString(
            s.to_string(),
            "PruningMode".to_string(),
            items_to_strings(vec!["0 [NKG]", "1 [E]", "2 [NKG] [E]"]),
        )
    }
}

impl FromStr for PruningMode {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (allows_pre, allows_post) = match parts.next() {
            Some("0") => (true, false),
            Some("1") => (false, true),
            Some("2") => (true, true),
            _ => return Err(PruningMode::parse_error(s)),
        };

        let selectors: Vec<String> = parts.map(str::to_uppercase).collect();
        if selectors.is_empty() {
            return Ok(PruningMode {
                max_depth: allows_pre,
                min_examples_to_split: allows_pre,
                min_information_gain: allows_pre,
                post_pruning: allows_post,
            });
        }
        if selectors.iter().any(|t| t.chars().any(|c| !"NKGE".contains(c))) {
            return Err(PruningMode::parse_error(s));
        }

        let selected = |letter: char| selectors.iter().any(|t| t.contains(letter));
        let mut mode = PruningMode {
            max_depth: allows_pre && selected('N'),
            min_examples_to_split: allows_pre && selected('K'),
            min_information_gain: allows_pre && selected('G'),
            post_pruning: allows_post && selected('E'),
        };
        if allows_pre && !(mode.max_depth || mode.min_examples_to_split || mode.min_information_gain) {
            mode.max_depth = true;
            mode.min_examples_to_split = true;
            mode.min_information_gain = true;
        }
        if allows_post {
            mode.post_pruning = true;
        }
        Ok(mode)
    }
}

fn default_pre_pruning() -> PrePruning {
    PrePruning::all()
}
fn default_use_post_pruning() -> bool {
    true
}
fn default_train_ratio() -> f64 {
    DEFAULT_TRAIN_RATIO
}
fn default_validation_fraction() -> f64 {
    DEFAULT_VALIDATION_FRACTION
}
fn default_k_folds() -> usize {
    DEFAULT_K_FOLDS
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Configuration for a training and evaluation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pre-pruning rules applied while the tree grows.
    #[serde(default = "default_pre_pruning")]
    pub pre_pruning: PrePruning,
    /// Prune the grown tree against a held-out validation slice.
    #[serde(default = "default_use_post_pruning")]
    pub use_post_pruning: bool,
    /// Fraction of the data used for training in the train/test split.
    #[serde(default = "default_train_ratio")]
    pub train_ratio: f64,
    /// Fraction of the training data held out for post-pruning.
    #[serde(default = "default_validation_fraction")]
    pub validation_fraction: f64,
    /// Number of cross-validation folds.
    #[serde(default = "default_k_folds")]
    pub k_folds: usize,
    /// Seed for all random sampling.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

// Defaults enable every pruning strategy, matching mode "2".
impl Default for Config {
    fn default() -> Self {
        Config {
            pre_pruning: PrePruning::all(),
            use_post_pruning: true,
            train_ratio: DEFAULT_TRAIN_RATIO,
            validation_fraction: DEFAULT_VALIDATION_FRACTION,
            k_folds: DEFAULT_K_FOLDS,
            seed: DEFAULT_SEED,
        }
    }
}

impl Config {
    /// Default configuration restricted to the strategies enabled in `mode`.
    pub fn from_mode(mode: PruningMode) -> Self {
        Config::default().with_mode(mode)
    }

    /// Enable exactly the strategies in `mode`, using default thresholds
    /// for rules that were previously disabled.
    pub fn with_mode(mut self, mode: PruningMode) -> Self {
        let pre = &mut self.pre_pruning;
        pre.max_depth = mode.max_depth.then(|| pre.max_depth.unwrap_or(DEFAULT_MAX_DEPTH));
        pre.min_examples_to_split = mode
            .min_examples_to_split
            .then(|| pre.min_examples_to_split.unwrap_or(DEFAULT_MIN_EXAMPLES_TO_SPLIT));
        pre.min_information_gain = mode
            .min_information_gain
            .then(|| pre.min_information_gain.unwrap_or(DEFAULT_MIN_INFORMATION_GAIN));
        self.use_post_pruning = mode.post_pruning;
        self
    }

    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> Result<(), ArborError> {
        validate_min_usize_parameter(self.k_folds, 2, "k_folds")?;
        validate_ratio_parameter(self.train_ratio, "train_ratio")?;
        if self.use_post_pruning {
            validate_ratio_parameter(self.validation_fraction, "validation_fraction")?;
        }
        if let Some(g) = self.pre_pruning.min_information_gain {
            validate_finite_float_parameter(g, "min_information_gain")?;
        }
        Ok(())
    }
}

/// IO
pub trait ArborIO: Serialize + DeserializeOwned + Sized {
    /// Save the object as json to a file.
    ///
    /// * `path` - Path to save to.
    fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ArborError> {
        fs::write(path, self.json_dump()?).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }

    /// Dump the object as a json string.
    fn json_dump(&self) -> Result<String, ArborError> {
        serde_json::to_string(self).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }

    /// Load the object from a json string.
    fn from_json(json_str: &str) -> Result<Self, ArborError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| ArborError::UnableToRead(e.to_string()))
    }

    /// Load the object from a path to a json file.
    ///
    /// * `path` - Path to load from.
    fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ArborError> {
        let json_str = fs::read_to_string(path).map_err(|e| ArborError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ArborIO for Config {}
