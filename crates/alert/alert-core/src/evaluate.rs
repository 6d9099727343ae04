//! Forecast threshold check.

use alert_spi::{Alert, Nutrient};
use chrono::Duration;
use forecast_spi::Forecast;

/// Raise an alert when any forecast value is strictly below `threshold`.
///
/// `horizon` is the wall-clock span the forecast covers; it only feeds the
/// alert message, rounded up to whole hours. NaN values never breach.
pub fn evaluate(
    crop: &str,
    nutrient: Nutrient,
    threshold: f64,
    forecast: &Forecast,
    horizon: Duration,
) -> Option<Alert> {
    let breach = forecast.first_below(threshold)?;
    let lowest = forecast
        .lowest()
        .map(|point| point.value)
        .unwrap_or(breach.value);

    tracing::info!(
        crop,
        %nutrient,
        threshold,
        lowest,
        first_breach = %breach.timestamp,
        "nutrient forecast below threshold"
    );

    Some(Alert::new(
        crop,
        nutrient,
        threshold,
        breach.timestamp,
        lowest,
        whole_hours(horizon),
    ))
}

fn whole_hours(span: Duration) -> i64 {
    let seconds = span.num_seconds();
    let hours = seconds / 3600;
    if seconds % 3600 > 0 {
        hours + 1
    } else {
        hours
    }
}
