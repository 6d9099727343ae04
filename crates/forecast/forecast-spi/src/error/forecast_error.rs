//! Forecast error types

use series_spi::SeriesError;
use thiserror::Error;

use super::ModelError;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug)]
pub enum ForecastError {
    /// History table has no rows to build features or timestamps from
    #[error("Insufficient history: cannot forecast, no data")]
    InsufficientHistory,

    /// Model prediction failed; earlier steps are discarded
    #[error("Forecast failed at step {step}: {source}")]
    StepFailed {
        step: usize,
        #[source]
        source: ModelError,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Synthesized row could not be appended to the working history
    #[error("Working history rejected synthesized row: {0}")]
    History(#[from] SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_history_message() {
        let error = ForecastError::InsufficientHistory;
        assert_eq!(
            error.to_string(),
            "Insufficient history: cannot forecast, no data"
        );
    }

    #[test]
    fn test_step_failed_message_and_source() {
        let error = ForecastError::StepFailed {
            step: 2,
            source: "missing feature 'pH_lag_12'".into(),
        };
        assert_eq!(
            error.to_string(),
            "Forecast failed at step 2: missing feature 'pH_lag_12'"
        );
        let source = error.source().expect("step failure carries its cause");
        assert_eq!(source.to_string(), "missing feature 'pH_lag_12'");
    }

    #[test]
    fn test_step_failed_fields() {
        let error = ForecastError::StepFailed {
            step: 3,
            source: "shape mismatch".into(),
        };
        if let ForecastError::StepFailed { step, source } = error {
            assert_eq!(step, 3);
            assert_eq!(source.to_string(), "shape mismatch");
        } else {
            panic!("Expected StepFailed variant");
        }
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = ForecastError::InvalidParameter {
            name: "horizon_steps".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'horizon_steps': must be at least 1"
        );
    }

    #[test]
    fn test_history_error_from_series_error() {
        let error: ForecastError = SeriesError::NoRows.into();
        assert!(matches!(error, ForecastError::History(SeriesError::NoRows)));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }

    #[test]
    fn test_error_can_be_boxed() {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(ForecastError::InsufficientHistory);
        assert!(boxed.downcast_ref::<ForecastError>().is_some());
    }
}
