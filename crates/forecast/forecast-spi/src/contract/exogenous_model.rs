//! Exogenous model capability

use crate::error::ModelResult;
use crate::model::FeatureVector;

/// A trained one-step-ahead predictor driven by exogenous regressors.
///
/// Any backend (seasonal, linear, gradient-boosted) can sit behind this
/// trait. Implementations are read-only during prediction and must be safe
/// to call from several threads at once.
///
/// # Example
///
/// ```rust,ignore
/// use forecast_spi::{ExogenousModel, FeatureVector};
///
/// fn next_value(model: &dyn ExogenousModel, features: &FeatureVector) -> f64 {
///     let input = (!model.required_feature_names().is_empty()).then_some(features);
///     model.predict_one_step(input).unwrap_or(f64::NAN)
/// }
/// ```
pub trait ExogenousModel: Send + Sync {
    /// Feature names the model expects, in its own order.
    ///
    /// Empty when the model needs no external regressors.
    fn required_feature_names(&self) -> &[String];

    /// Predict the next value.
    ///
    /// `features` is `None` when no features are required.
    fn predict_one_step(&self, features: Option<&FeatureVector>) -> ModelResult<f64>;

    /// Display name of the model
    fn name(&self) -> &str {
        "model"
    }
}
