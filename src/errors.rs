//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur while loading data, configuring, or training a tree.
#[derive(Debug, Error)]
pub enum ArborError {
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Unable to read a dataset or model from file.
    #[error("Unable to read from a file {0}")]
    UnableToRead(String),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// A line of an ARFF file could not be understood.
    #[error("Malformed ARFF input at line {line}: {reason}")]
    MalformedArff { line: usize, reason: String },
    /// An example has no value for an attribute the dataset requires.
    #[error("Example {row} has no value for attribute {attribute}.")]
    MissingValue { row: usize, attribute: String },
    /// Training was requested on a dataset with no examples.
    #[error("Cannot grow a tree from an empty dataset.")]
    EmptyDataset,
    /// Prediction or pruning was requested before the tree was fitted.
    #[error("The decision tree has not been fitted yet.")]
    UntrainedModel,
}
