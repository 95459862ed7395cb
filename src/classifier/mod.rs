// public modules
pub mod config;
pub mod core;
pub mod report;

// private modules
mod setters;

pub use self::core::Classifier;
pub use config::{Config, PrePruning, PruningMode};
pub use report::EvaluationReport;
