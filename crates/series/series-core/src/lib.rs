//! Series Core
//!
//! Loads per-crop sensor files into [`TimeSeriesTable`]s and cuts the
//! trailing windows the forecaster and report layer work on.

pub mod loader;
pub mod window;

// Re-export SPI types for implementations
pub use series_spi::{Result, SensorRow, SeriesError, TimeSeriesTable};

pub use loader::{load_csv, parse_timestamp, DEFAULT_TIMESTAMP_COLUMN};
pub use window::trailing_window;
