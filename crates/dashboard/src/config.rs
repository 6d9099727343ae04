//! Dashboard configuration
//!
//! Everything the report service needs is fixed at startup: crops, the
//! nutrients to forecast, environmental fields, thresholds, forecast
//! settings and the data/model directories. Built from `Default` or a JSON
//! file in which every key is optional.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use alert_core::{Nutrient, ThresholdTable};
use chrono::Duration;
use forecast_facade::ForecastConfig;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// A monitored crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropProfile {
    /// Lookup key, also the default data file stem
    pub key: String,
    pub display_name: String,
    /// Sensor file name inside the data directory; `<key>.csv` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
}

impl CropProfile {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            data_file: None,
        }
    }

    pub fn data_file_name(&self) -> String {
        self.data_file
            .clone()
            .unwrap_or_else(|| format!("{}.csv", self.key))
    }
}

/// Report service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub crops: Vec<CropProfile>,
    pub nutrients: Vec<Nutrient>,
    pub env_features: Vec<String>,
    pub thresholds: ThresholdTable,
    pub forecast: ForecastConfig,
    /// Trailing history shown and fed to the forecaster
    pub window_hours: i64,
    pub timestamp_column: String,
    pub data_dir: PathBuf,
    pub model_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            crops: vec![
                CropProfile::new("coffee", "Coffee"),
                CropProfile::new("blackpepper", "BlackPepper"),
                CropProfile::new("durian", "Durian"),
            ],
            nutrients: Nutrient::ALL.to_vec(),
            env_features: vec![
                "Temperature".to_string(),
                "pH".to_string(),
                "Moisture (%)".to_string(),
            ],
            thresholds: ThresholdTable::default(),
            forecast: ForecastConfig::default(),
            window_hours: 24,
            timestamp_column: series_core::DEFAULT_TIMESTAMP_COLUMN.to_string(),
            data_dir: PathBuf::from("data"),
            model_dir: PathBuf::from("model"),
        }
    }
}

impl DashboardConfig {
    /// Configuration from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace the data and model directories where an override is given.
    pub fn with_dirs(mut self, data_dir: Option<PathBuf>, model_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = model_dir {
            self.model_dir = dir;
        }
        self
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DashboardError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), crops = config.crops.len(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for crop in &self.crops {
            if crop.key.trim().is_empty() {
                return Err(DashboardError::Config("crop key must not be empty".into()));
            }
            if !keys.insert(crop.key.to_lowercase()) {
                return Err(DashboardError::Config(format!(
                    "duplicate crop '{}'",
                    crop.key
                )));
            }
        }
        if self.window_hours <= 0 || Duration::try_hours(self.window_hours).is_none() {
            return Err(DashboardError::Config(format!(
                "window_hours must be a positive number of hours, got {}",
                self.window_hours
            )));
        }
        self.forecast
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;
        self.thresholds.validate()?;
        Ok(())
    }

    /// Profile for `key`, case-insensitive.
    pub fn crop(&self, key: &str) -> Result<&CropProfile> {
        self.crops
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| DashboardError::UnknownCrop(key.to_string()))
    }

    pub fn data_path(&self, crop: &CropProfile) -> PathBuf {
        self.data_dir.join(crop.data_file_name())
    }

    pub fn window(&self) -> Duration {
        Duration::try_hours(self.window_hours).unwrap_or_else(Duration::zero)
    }
}
