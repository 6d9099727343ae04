//! Error module containing error types and result aliases

mod forecast_error;

pub use forecast_error::ForecastError;

use std::error::Error;

/// Opaque failure raised by a model backend
pub type ModelError = Box<dyn Error + Send + Sync>;

/// Result type for model predictions
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Result type for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;
