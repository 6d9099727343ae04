//! Forecast Consumer API
//!
//! Consumer configuration and builder APIs for recursive forecasting.
//!
//! This crate provides:
//! - [`ForecastConfig`], the serializable horizon/step settings
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use forecast_core::{
    build_feature_vector, features, forecast_horizon, recursive, FeatureKind,
    RecursiveForecaster, CONSTANT_FEATURE, SEASONAL_LAG,
};

// Re-export traits from SPI
pub use forecast_spi::{
    ExogenousModel, FeatureVector, Forecast, ForecastError, ForecastPoint, ModelError,
    ModelResult, Result,
};

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration for the forecast loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future steps per run
    pub horizon_steps: usize,
    /// Minutes between successive forecast points
    pub step_minutes: i64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_steps: 3,
            step_minutes: 60,
        }
    }
}

impl ForecastConfig {
    pub fn new(horizon_steps: usize, step_minutes: i64) -> Self {
        Self {
            horizon_steps,
            step_minutes,
        }
    }

    /// Step size; out-of-range minutes collapse to zero, which `build` rejects.
    pub fn step_duration(&self) -> Duration {
        Duration::try_minutes(self.step_minutes).unwrap_or_else(Duration::zero)
    }

    /// Horizon length as wall-clock time.
    pub fn span(&self) -> Duration {
        i32::try_from(self.horizon_steps)
            .ok()
            .and_then(|steps| self.step_duration().checked_mul(steps))
            .unwrap_or_else(Duration::zero)
    }

    /// Validate and build the forecaster.
    pub fn build(&self) -> Result<RecursiveForecaster> {
        RecursiveForecaster::new(self.horizon_steps, self.step_duration())
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ForecastConfig;
    pub use forecast_core::{build_feature_vector, forecast_horizon, RecursiveForecaster};
    pub use forecast_spi::{
        ExogenousModel, FeatureVector, Forecast, ForecastError, ForecastPoint, ModelResult,
        Result,
    };
}
