//! Forecast Service Provider Interface
//!
//! Defines the model capability consumed by the recursive forecaster, the
//! feature vectors handed to it and the forecasts it produces.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ExogenousModel;
pub use error::{ForecastError, ModelError, ModelResult, Result};
pub use model::{FeatureVector, Forecast, ForecastPoint};
