//! Forecast Facade
//!
//! High-level API for recursive exogenous forecasting. Re-exports all public
//! types from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{features, recursive};

// History table consumed by the forecaster
pub use series_spi::{SensorRow, SeriesError, TimeSeriesTable};
