/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Errors raised by the perceptron, its datasets and its configuration.
#[derive(Debug, thiserror::Error)]
pub enum PerceptronError {
    /// A constructor argument, hyperparameter or label is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An input vector does not have one value per weight.
    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
