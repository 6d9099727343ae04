//! Forecast Core
//!
//! Core implementations for recursive exogenous forecasting: the feature
//! builder that turns recent history into a model input row, and the loop
//! driver that predicts one step at a time while extending the history.

pub mod features;
pub mod recursive;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ExogenousModel, FeatureVector, Forecast, ForecastError, ForecastPoint, ModelError,
    ModelResult, Result,
};

// Re-export main types
pub use features::{build_feature_vector, FeatureKind, CONSTANT_FEATURE, SEASONAL_LAG};
pub use recursive::{forecast_horizon, RecursiveForecaster};
