//! Model error types

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while loading or evaluating a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A feature named by the model is absent from the input vector
    #[error("Missing feature '{0}'")]
    MissingFeature(String),

    /// The model needs features but none were supplied
    #[error("Model requires {required} features but none were supplied")]
    MissingFeatures { required: usize },

    /// The prediction is NaN or infinite
    #[error("Non-finite prediction: {0}")]
    NonFinite(f64),

    /// The model file could not be read
    #[error("Failed to read model {path}: {message}")]
    Io { path: String, message: String },

    /// The model file is not a valid model description
    #[error("Failed to parse model {path}: {message}")]
    Parse { path: String, message: String },

    /// The model description is structurally invalid
    #[error("Invalid model: {0}")]
    Invalid(String),
}
