//! Exogenous feature construction
//!
//! Resolves the feature names a model declares against the most recent rows
//! of a history table. Only the intercept marker and the `_lag_1` /
//! `_lag_12` suffixes are recognised; anything else is a direct field lookup.

use forecast_spi::{FeatureVector, ForecastError, Result};
use series_spi::TimeSeriesTable;

/// Name of the intercept term; always resolves to `1`.
pub const CONSTANT_FEATURE: &str = "const";

/// Row offset used by `_lag_12` features.
pub const SEASONAL_LAG: usize = 12;

const LAG_ONE_SUFFIX: &str = "_lag_1";
const LAG_TWELVE_SUFFIX: &str = "_lag_12";

/// How a feature name is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind<'a> {
    /// Intercept marker
    Constant,
    /// Base field in the last row
    LagOne(&'a str),
    /// Base field twelve rows from the end, or the last row on short histories
    LagTwelve(&'a str),
    /// Field of the same name in the last row
    Direct(&'a str),
}

impl<'a> FeatureKind<'a> {
    pub fn parse(name: &'a str) -> Self {
        if name == CONSTANT_FEATURE {
            Self::Constant
        } else if let Some(base) = name.strip_suffix(LAG_ONE_SUFFIX) {
            Self::LagOne(base)
        } else if let Some(base) = name.strip_suffix(LAG_TWELVE_SUFFIX) {
            Self::LagTwelve(base)
        } else {
            Self::Direct(name)
        }
    }

    /// Value of this feature in `history`. Absent fields resolve to `0`.
    ///
    /// `history` must not be empty.
    fn resolve(self, history: &TimeSeriesTable) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::LagOne(base) => history.latest(base).unwrap_or(0.0),
            Self::LagTwelve(base) => {
                let position = if history.len() >= SEASONAL_LAG {
                    SEASONAL_LAG
                } else {
                    1
                };
                history
                    .row_from_end(position)
                    .and_then(|row| history.value_in(row, base))
                    .unwrap_or(0.0)
            }
            Self::Direct(name) => history.latest(name).unwrap_or(0.0),
        }
    }
}

/// Build the single-row feature vector for the next forecast step.
///
/// The output holds exactly `required_names`, in order. Each name is
/// resolved independently of the others.
pub fn build_feature_vector<S: AsRef<str>>(
    history: &TimeSeriesTable,
    required_names: &[S],
) -> Result<FeatureVector> {
    if history.is_empty() {
        return Err(ForecastError::InsufficientHistory);
    }

    let mut features = FeatureVector::with_capacity(required_names.len());
    for name in required_names {
        let name = name.as_ref();
        features.push(name, FeatureKind::parse(name).resolve(history));
    }
    Ok(features)
}
