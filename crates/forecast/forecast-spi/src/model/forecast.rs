//! Forecast result model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One predicted value at a future timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// Ordered forecast, one point per requested step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Earliest point strictly below `threshold`.
    pub fn first_below(&self, threshold: f64) -> Option<&ForecastPoint> {
        self.points.iter().find(|p| p.value < threshold)
    }

    /// Point with the lowest value; NaN values are skipped.
    pub fn lowest(&self) -> Option<&ForecastPoint> {
        self.points
            .iter()
            .filter(|p| !p.value.is_nan())
            .min_by(|a, b| a.value.total_cmp(&b.value))
    }
}

impl IntoIterator for Forecast {
    type Item = ForecastPoint;
    type IntoIter = std::vec::IntoIter<ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
