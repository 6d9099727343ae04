//! On-disk model lookup
//!
//! One model file per crop and nutrient, all in a single directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use forecast_spi::ExogenousModel;

use crate::error::Result;
use crate::linear::LinearExogenousModel;

/// File name for a crop/nutrient model, e.g. `best_model_coffee_N.json`.
pub fn model_file_name(crop: &str, nutrient: &str) -> String {
    format!(
        "best_model_{}_{}.json",
        crop.to_lowercase(),
        nutrient.to_uppercase()
    )
}

/// Directory of trained models
#[derive(Debug, Clone)]
pub struct ModelStore {
    model_dir: PathBuf,
}

impl ModelStore {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    /// Where the model for `crop` / `nutrient` lives.
    pub fn path_for(&self, crop: &str, nutrient: &str) -> PathBuf {
        self.model_dir.join(model_file_name(crop, nutrient))
    }

    /// Load the model, surfacing read and parse failures.
    ///
    /// `Ok(None)` means no model file exists.
    pub fn try_load(&self, crop: &str, nutrient: &str) -> Result<Option<LinearExogenousModel>> {
        let path = self.path_for(crop, nutrient);
        if !path.is_file() {
            return Ok(None);
        }
        let model = LinearExogenousModel::from_file(&path)?;
        tracing::debug!(
            crop,
            nutrient,
            path = %path.display(),
            features = model.coefficients().len(),
            "loaded model"
        );
        Ok(Some(model))
    }

    /// Load the model for display purposes.
    ///
    /// A file that cannot be loaded is logged and reported as absent.
    pub fn load(&self, crop: &str, nutrient: &str) -> Option<Arc<dyn ExogenousModel>> {
        match self.try_load(crop, nutrient) {
            Ok(Some(model)) => Some(Arc::new(model)),
            Ok(None) => {
                tracing::debug!(crop, nutrient, "no model available");
                None
            }
            Err(e) => {
                tracing::error!(crop, nutrient, error = %e, "failed to load model");
                None
            }
        }
    }
}
