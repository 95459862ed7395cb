pub const DEFAULT_MAX_DEPTH: usize = 10;
pub const DEFAULT_MIN_EXAMPLES_TO_SPLIT: usize = 5;
pub const DEFAULT_MIN_INFORMATION_GAIN: f64 = 0.1;
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;
pub const DEFAULT_VALIDATION_FRACTION: f64 = 0.2;
pub const DEFAULT_K_FOLDS: usize = 10;
pub const DEFAULT_SEED: u64 = 42;
