//! Report types produced by the dashboard service.

use alert_spi::{Alert, Nutrient};
use chrono::NaiveDateTime;
use forecast_facade::Forecast;
use serde::Serialize;

/// `(timestamp, value)` pairs in time order
pub type Series = Vec<(NaiveDateTime, f64)>;

/// One field of the most recent sensor row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub field: String,
    /// `None` when the data file has no such column
    pub value: Option<f64>,
}

/// The most recent sensor row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestReadings {
    pub timestamp: NaiveDateTime,
    pub readings: Vec<Reading>,
}

impl LatestReadings {
    pub fn get(&self, field: &str) -> Option<f64> {
        self.readings
            .iter()
            .find(|r| r.field == field)
            .and_then(|r| r.value)
    }
}

/// One environmental field over the trailing window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSeries {
    pub field: String,
    pub points: Series,
}

/// What happened when forecasting one nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NutrientOutcome {
    Forecast {
        forecast: Forecast,
        alert: Option<Alert>,
    },
    /// No model file for this crop and nutrient
    NoModel,
    Failed {
        message: String,
    },
}

impl NutrientOutcome {
    pub fn alert(&self) -> Option<&Alert> {
        match self {
            Self::Forecast { alert, .. } => alert.as_ref(),
            _ => None,
        }
    }

    pub fn forecast(&self) -> Option<&Forecast> {
        match self {
            Self::Forecast { forecast, .. } => Some(forecast),
            _ => None,
        }
    }
}

/// History, threshold and forecast outcome for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientReport {
    pub nutrient: Nutrient,
    pub threshold: Option<f64>,
    pub history: Series,
    pub outcome: NutrientOutcome,
}

/// Everything shown for one crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropReport {
    pub crop: String,
    pub display_name: String,
    pub window_hours: i64,
    pub horizon_steps: usize,
    pub latest: LatestReadings,
    pub environment: Vec<EnvironmentSeries>,
    pub nutrients: Vec<NutrientReport>,
}

impl CropReport {
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.nutrients.iter().filter_map(|n| n.outcome.alert())
    }

    pub fn nutrient(&self, nutrient: Nutrient) -> Option<&NutrientReport> {
        self.nutrients.iter().find(|n| n.nutrient == nutrient)
    }
}
