//! Crop report service
//!
//! Loads a crop's sensor history, cuts the trailing window, and forecasts
//! every configured nutrient against its threshold. Nutrients run in
//! parallel and share nothing mutable; one nutrient failing leaves the
//! others untouched.

use std::sync::Arc;

use alert_core::{evaluate, Nutrient};
use forecast_facade::{ExogenousModel, RecursiveForecaster, TimeSeriesTable};
use model::ModelStore;
use rayon::prelude::*;
use series_core::{load_csv, trailing_window, SeriesError};

use crate::config::{CropProfile, DashboardConfig};
use crate::error::{DashboardError, Result};
use crate::report::{
    CropReport, EnvironmentSeries, LatestReadings, NutrientOutcome, NutrientReport, Reading,
};

/// Where trained models come from
pub trait ModelSource: Send + Sync {
    /// Model for `crop` / `nutrient`, or `None` when there is none.
    fn model(&self, crop: &str, nutrient: Nutrient) -> Option<Arc<dyn ExogenousModel>>;
}

impl ModelSource for ModelStore {
    fn model(&self, crop: &str, nutrient: Nutrient) -> Option<Arc<dyn ExogenousModel>> {
        self.load(crop, nutrient.symbol())
    }
}

/// Builds [`CropReport`]s from a fixed configuration
pub struct CropDashboard {
    config: DashboardConfig,
    forecaster: RecursiveForecaster,
    models: Box<dyn ModelSource>,
}

impl CropDashboard {
    /// Service reading models from the configured model directory.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let store = ModelStore::new(config.model_dir.clone());
        Self::with_models(config, store)
    }

    pub fn with_models(
        config: DashboardConfig,
        models: impl ModelSource + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let forecaster = config
            .forecast
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;
        Ok(Self {
            config,
            forecaster,
            models: Box::new(models),
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Full, time-sorted history for one crop.
    pub fn load_history(&self, crop: &CropProfile) -> Result<TimeSeriesTable> {
        let path = self.config.data_path(crop);
        load_csv(&path, &self.config.timestamp_column).map_err(|source| DashboardError::Data {
            crop: crop.key.clone(),
            source,
        })
    }

    /// Build the report for `crop_key`.
    ///
    /// A data load failure fails the whole report. Model and forecast
    /// problems are confined to the affected nutrient.
    pub fn report(&self, crop_key: &str) -> Result<CropReport> {
        let profile = self.config.crop(crop_key)?;
        let history = self.load_history(profile)?;

        let last = history.last().ok_or_else(|| DashboardError::Data {
            crop: profile.key.clone(),
            source: SeriesError::NoRows,
        })?;
        let latest = LatestReadings {
            timestamp: last.timestamp,
            readings: self
                .config
                .env_features
                .iter()
                .map(|field| Reading {
                    field: field.clone(),
                    value: history.value_in(last, field),
                })
                .collect(),
        };

        let window = trailing_window(&history, self.config.window());
        let environment = self
            .config
            .env_features
            .iter()
            .map(|field| EnvironmentSeries {
                field: field.clone(),
                points: window.column(field).unwrap_or_default(),
            })
            .collect();

        let nutrients: Vec<NutrientReport> = self
            .config
            .nutrients
            .par_iter()
            .map(|&nutrient| self.nutrient_report(&profile.key, nutrient, &window))
            .collect();

        tracing::info!(
            crop = %profile.key,
            rows = history.len(),
            window_rows = window.len(),
            alerts = nutrients.iter().filter(|n| n.outcome.alert().is_some()).count(),
            "report built"
        );

        Ok(CropReport {
            crop: profile.key.clone(),
            display_name: profile.display_name.clone(),
            window_hours: self.config.window_hours,
            horizon_steps: self.forecaster.horizon_steps(),
            latest,
            environment,
            nutrients,
        })
    }

    fn nutrient_report(
        &self,
        crop: &str,
        nutrient: Nutrient,
        window: &TimeSeriesTable,
    ) -> NutrientReport {
        NutrientReport {
            nutrient,
            threshold: self.config.thresholds.threshold(crop, nutrient),
            history: window.column(nutrient.symbol()).unwrap_or_default(),
            outcome: self.forecast_nutrient(crop, nutrient, window),
        }
    }

    /// Forecast one nutrient over `window` and check its threshold.
    pub fn forecast_nutrient(
        &self,
        crop: &str,
        nutrient: Nutrient,
        window: &TimeSeriesTable,
    ) -> NutrientOutcome {
        let model = match self.models.model(crop, nutrient) {
            Some(model) => model,
            None => {
                tracing::warn!(crop, %nutrient, "no model");
                return NutrientOutcome::NoModel;
            }
        };

        match self.forecaster.forecast(model.as_ref(), window) {
            Ok(forecast) => {
                let alert = self.config.thresholds.threshold(crop, nutrient).and_then(|t| {
                    evaluate(crop, nutrient, t, &forecast, self.config.forecast.span())
                });
                NutrientOutcome::Forecast { forecast, alert }
            }
            Err(e) => {
                tracing::error!(crop, %nutrient, error = %e, "forecast failed");
                NutrientOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
