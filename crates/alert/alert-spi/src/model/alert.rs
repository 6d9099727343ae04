//! Alert types for nutrient threshold breaches.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Nutrient;

/// A forecast nutrient level below the crop's minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub crop: String,
    pub nutrient: Nutrient,
    pub threshold: f64,
    /// Timestamp of the first forecast point below the threshold
    pub first_breach: NaiveDateTime,
    pub lowest_value: f64,
    /// Hours covered by the forecast that raised the alert
    pub horizon_hours: i64,
    pub message: String,
}

impl Alert {
    pub fn new(
        crop: impl Into<String>,
        nutrient: Nutrient,
        threshold: f64,
        first_breach: NaiveDateTime,
        lowest_value: f64,
        horizon_hours: i64,
    ) -> Self {
        let message = format!(
            "{} levels may drop below threshold in the next {} hours!",
            nutrient, horizon_hours
        );
        Self {
            crop: crop.into(),
            nutrient,
            threshold,
            first_breach,
            lowest_value,
            horizon_hours,
            message,
        }
    }

    /// How far the lowest forecast value sits under the threshold.
    pub fn shortfall(&self) -> f64 {
        self.threshold - self.lowest_value
    }
}
