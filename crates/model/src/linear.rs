//! Linear regression over exogenous features
//!
//! Model files look like:
//!
//! ```json
//! {
//!   "name": "coffee_N",
//!   "intercept": 12.0,
//!   "coefficients": [
//!     { "feature": "N_lag_1", "weight": 0.94 },
//!     { "feature": "Moisture (%)_lag_12", "weight": -0.08 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use forecast_spi::{ExogenousModel, FeatureVector, ModelResult};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One `feature * weight` term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    pub feature: String,
    pub weight: f64,
}

#[derive(Deserialize)]
struct LinearModelFile {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    intercept: f64,
    #[serde(default)]
    coefficients: Vec<Coefficient>,
}

fn default_name() -> String {
    "linear".to_string()
}

/// `intercept + sum(weight * feature)` over a fixed, ordered feature list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearModelFile")]
pub struct LinearExogenousModel {
    name: String,
    intercept: f64,
    coefficients: Vec<Coefficient>,
    #[serde(skip)]
    features: Vec<String>,
}

impl TryFrom<LinearModelFile> for LinearExogenousModel {
    type Error = ModelError;

    fn try_from(file: LinearModelFile) -> Result<Self> {
        Self::new(file.name, file.intercept, file.coefficients)
    }
}

impl LinearExogenousModel {
    /// Build a model. Feature names must be unique and every weight finite.
    pub fn new(
        name: impl Into<String>,
        intercept: f64,
        coefficients: Vec<Coefficient>,
    ) -> Result<Self> {
        if !intercept.is_finite() {
            return Err(ModelError::Invalid(format!(
                "intercept must be finite, got {}",
                intercept
            )));
        }

        let mut seen = HashSet::new();
        for c in &coefficients {
            if !seen.insert(c.feature.as_str()) {
                return Err(ModelError::Invalid(format!(
                    "duplicate feature '{}'",
                    c.feature
                )));
            }
            if !c.weight.is_finite() {
                return Err(ModelError::Invalid(format!(
                    "weight for '{}' must be finite, got {}",
                    c.feature, c.weight
                )));
            }
        }

        let features = coefficients.iter().map(|c| c.feature.clone()).collect();
        Ok(Self {
            name: name.into(),
            intercept,
            coefficients,
            features,
        })
    }

    /// Build from `(feature, weight)` pairs.
    pub fn from_terms<S: Into<String>>(
        name: impl Into<String>,
        intercept: f64,
        terms: impl IntoIterator<Item = (S, f64)>,
    ) -> Result<Self> {
        let coefficients = terms
            .into_iter()
            .map(|(feature, weight)| Coefficient {
                feature: feature.into(),
                weight,
            })
            .collect();
        Self::new(name, intercept, coefficients)
    }

    /// Parse a model description.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ModelError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a model description from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ModelError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// Evaluate against a feature vector.
    pub fn evaluate(&self, features: Option<&FeatureVector>) -> Result<f64> {
        let mut value = self.intercept;

        if !self.coefficients.is_empty() {
            let features = features.ok_or(ModelError::MissingFeatures {
                required: self.coefficients.len(),
            })?;
            for c in &self.coefficients {
                let x = features
                    .get(&c.feature)
                    .ok_or_else(|| ModelError::MissingFeature(c.feature.clone()))?;
                value += c.weight * x;
            }
        }

        if !value.is_finite() {
            return Err(ModelError::NonFinite(value));
        }
        Ok(value)
    }
}

impl ExogenousModel for LinearExogenousModel {
    fn required_feature_names(&self) -> &[String] {
        &self.features
    }

    fn predict_one_step(&self, features: Option<&FeatureVector>) -> ModelResult<f64> {
        Ok(self.evaluate(features)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearExogenousModel {
        LinearExogenousModel::from_terms(
            "coffee_N",
            10.0,
            [("N_lag_1", 0.5), ("pH", 2.0), ("const", 3.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_required_features_follow_coefficients() {
        let model = model();
        assert_eq!(model.required_feature_names(), &["N_lag_1", "pH", "const"]);
        assert_eq!(model.name(), "coffee_N");
    }

    #[test]
    fn test_predict() {
        let features: FeatureVector = vec![("const", 1.0), ("pH", 6.0), ("N_lag_1", 200.0)]
            .into_iter()
            .collect();
        let value = model().predict_one_step(Some(&features)).unwrap();
        assert_eq!(value, 10.0 + 100.0 + 12.0 + 3.0);
    }

    #[test]
    fn test_missing_feature() {
        let features: FeatureVector = vec![("const", 1.0), ("N_lag_1", 200.0)]
            .into_iter()
            .collect();
        let result = model().evaluate(Some(&features));
        assert_eq!(result, Err(ModelError::MissingFeature("pH".to_string())));
    }

    #[test]
    fn test_no_features_supplied() {
        assert_eq!(
            model().evaluate(None),
            Err(ModelError::MissingFeatures { required: 3 })
        );

        let error = model().predict_one_step(None).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Model requires 3 features but none were supplied"
        );
    }

    #[test]
    fn test_intercept_only_model() {
        let model = LinearExogenousModel::from_terms::<&str>("flat", 190.0, []).unwrap();
        assert!(model.required_feature_names().is_empty());
        assert_eq!(model.predict_one_step(None).unwrap(), 190.0);
    }

    #[test]
    fn test_non_finite_prediction() {
        let model = LinearExogenousModel::from_terms("m", 0.0, [("pH", 1.0)]).unwrap();
        let features: FeatureVector = vec![("pH", f64::NAN)].into_iter().collect();
        assert!(matches!(
            model.evaluate(Some(&features)),
            Err(ModelError::NonFinite(v)) if v.is_nan()
        ));
    }

    #[test]
    fn test_rejects_duplicate_features() {
        let result = LinearExogenousModel::from_terms("m", 0.0, [("pH", 1.0), ("pH", 2.0)]);
        assert_eq!(
            result,
            Err(ModelError::Invalid("duplicate feature 'pH'".to_string()))
        );
    }

    #[test]
    fn test_from_json() {
        let model = LinearExogenousModel::from_json(
            r#"{
                "name": "durian_K",
                "intercept": 4.5,
                "coefficients": [
                    {"feature": "K_lag_1", "weight": 0.97},
                    {"feature": "Temperature_lag_12", "weight": -0.1}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(model.name(), "durian_K");
        assert_eq!(model.intercept(), 4.5);
        assert_eq!(
            model.required_feature_names(),
            &["K_lag_1", "Temperature_lag_12"]
        );
    }

    #[test]
    fn test_from_json_defaults() {
        let model = LinearExogenousModel::from_json(r#"{"intercept": 2.0}"#).unwrap();
        assert_eq!(model.name(), "linear");
        assert!(model.coefficients().is_empty());
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let result = LinearExogenousModel::from_json(
            r#"{"coefficients": [{"feature": "pH", "weight": 1}, {"feature": "pH", "weight": 1}]}"#,
        );
        assert!(matches!(result, Err(ModelError::Parse { .. })));

        assert!(LinearExogenousModel::from_json("not json").is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let model = model();
        let json = serde_json::to_string(&model).unwrap();
        let back = LinearExogenousModel::from_json(&json).unwrap();
        assert_eq!(back, model);
    }
}
