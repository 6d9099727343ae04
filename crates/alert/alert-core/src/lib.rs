//! Alert Core
//!
//! Threshold tables and the forecast check that raises [`Alert`]s.

pub mod evaluate;
pub mod thresholds;

// Re-export SPI types for implementations
pub use alert_spi::{Alert, AlertError, Nutrient, Result};

pub use evaluate::evaluate;
pub use thresholds::ThresholdTable;
