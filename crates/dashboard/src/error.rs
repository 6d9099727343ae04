//! Dashboard error types

use alert_spi::AlertError;
use series_spi::SeriesError;
use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors that abort a whole crop report or the configuration load
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown crop '{0}'")]
    UnknownCrop(String),

    #[error("Error loading data for {crop}: {source}")]
    Data {
        crop: String,
        #[source]
        source: SeriesError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Thresholds(#[from] AlertError),
}
