//! Model module containing data structures

mod feature_vector;
mod forecast;

pub use feature_vector::FeatureVector;
pub use forecast::{Forecast, ForecastPoint};
