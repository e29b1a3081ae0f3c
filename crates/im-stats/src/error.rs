//! Error types for im-stats

use thiserror::Error;

/// Errors from the checked statistics API, configuration and input parsing.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The sample has no values.
    #[error("sample is empty")]
    EmptySample,

    /// The sample is smaller than the statistic requires.
    #[error("need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A sample value could not be read as a number.
    #[error("invalid number: {0}")]
    Parse(String),

    /// Configuration is malformed or out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for checked im-stats operations.
pub type Result<T> = std::result::Result<T, StatsError>;
