//! Recursive multi-step forecasting
//!
//! Predicts one step at a time. After every step a synthesized row is
//! appended to a private copy of the history so the next step's lag
//! features see it. Environmental fields are carried forward unchanged; the
//! loop forecasts the model's target only.

use chrono::{Duration, NaiveDateTime};
use forecast_spi::{ExogenousModel, Forecast, ForecastError, ForecastPoint, Result};
use series_spi::TimeSeriesTable;

use crate::features::build_feature_vector;

/// Forecast `horizon_steps` points spaced `step_duration` apart.
///
/// Point `k` (1-based) is stamped `last timestamp of history + k * step_duration`.
/// The caller's `history` is never modified. A model failure aborts the run
/// with [`ForecastError::StepFailed`] and no partial result.
pub fn forecast_horizon<M: ExogenousModel + ?Sized>(
    model: &M,
    history: &TimeSeriesTable,
    horizon_steps: usize,
    step_duration: Duration,
) -> Result<Forecast> {
    validate(horizon_steps, step_duration)?;
    let origin = history
        .last_timestamp()
        .ok_or(ForecastError::InsufficientHistory)?;

    let required = model.required_feature_names();
    let mut working = history.clone();
    let mut points = Vec::with_capacity(horizon_steps);

    for step in 1..=horizon_steps {
        let features = if required.is_empty() {
            None
        } else {
            Some(build_feature_vector(&working, required)?)
        };

        let value = model
            .predict_one_step(features.as_ref())
            .map_err(|source| ForecastError::StepFailed { step, source })?;

        let timestamp = step_timestamp(origin, step, step_duration)?;
        tracing::trace!(model = model.name(), step, %timestamp, value, "forecast step");

        let next = working
            .last()
            .ok_or(ForecastError::InsufficientHistory)?
            .carried_to(timestamp);
        working.push(next)?;

        points.push(ForecastPoint { timestamp, value });
    }

    tracing::debug!(
        model = model.name(),
        steps = horizon_steps,
        features = required.len(),
        "forecast complete"
    );
    Ok(Forecast::new(points))
}

fn validate(horizon_steps: usize, step_duration: Duration) -> Result<()> {
    if horizon_steps == 0 {
        return Err(ForecastError::InvalidParameter {
            name: "horizon_steps".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if step_duration <= Duration::zero() {
        return Err(ForecastError::InvalidParameter {
            name: "step_duration".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

fn step_timestamp(
    origin: NaiveDateTime,
    step: usize,
    step_duration: Duration,
) -> Result<NaiveDateTime> {
    i32::try_from(step)
        .ok()
        .and_then(|k| step_duration.checked_mul(k))
        .and_then(|offset| origin.checked_add_signed(offset))
        .ok_or_else(|| ForecastError::InvalidParameter {
            name: "step_duration".to_string(),
            reason: format!("step {} overflows the timestamp range", step),
        })
}

/// Forecast loop with a fixed horizon and step size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveForecaster {
    horizon_steps: usize,
    step_duration: Duration,
}

impl RecursiveForecaster {
    pub fn new(horizon_steps: usize, step_duration: Duration) -> Result<Self> {
        validate(horizon_steps, step_duration)?;
        Ok(Self {
            horizon_steps,
            step_duration,
        })
    }

    /// Steps of one hour.
    pub fn hourly(horizon_steps: usize) -> Result<Self> {
        Self::new(horizon_steps, Duration::hours(1))
    }

    pub fn horizon_steps(&self) -> usize {
        self.horizon_steps
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    pub fn forecast<M: ExogenousModel + ?Sized>(
        &self,
        model: &M,
        history: &TimeSeriesTable,
    ) -> Result<Forecast> {
        forecast_horizon(model, history, self.horizon_steps, self.step_duration)
    }
}
