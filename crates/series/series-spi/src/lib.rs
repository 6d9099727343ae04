//! Series Service Provider Interface
//!
//! Defines the timestamped sensor table shared by loaders, forecasters and
//! the report layer.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{Result, SeriesError};
pub use model::{SensorRow, TimeSeriesTable};
