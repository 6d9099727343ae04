//! # dashboard
//!
//! Crop nutrient monitoring: latest sensor readings, trailing environmental
//! history, and per-nutrient forecasts checked against crop thresholds.

pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod service;

pub use config::{CropProfile, DashboardConfig};
pub use error::{DashboardError, Result};
pub use render::{render_crops, render_report};
pub use report::{
    CropReport, EnvironmentSeries, LatestReadings, NutrientOutcome, NutrientReport, Reading,
    Series,
};
pub use service::{CropDashboard, ModelSource};
