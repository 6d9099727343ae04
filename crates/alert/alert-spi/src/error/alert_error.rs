//! Alert error types.

use thiserror::Error;

/// Threshold and alert errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlertError {
    #[error("Unknown nutrient '{0}': expected N, P or K")]
    UnknownNutrient(String),

    #[error("No thresholds configured for crop '{0}'")]
    UnknownCrop(String),

    #[error("Invalid threshold for {crop}/{nutrient}: {value}")]
    InvalidThreshold {
        crop: String,
        nutrient: String,
        value: f64,
    },
}

/// Result type for alert operations.
pub type Result<T> = std::result::Result<T, AlertError>;
