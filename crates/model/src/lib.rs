//! Model backend
//!
//! A JSON-described linear regressor over exogenous features and the
//! directory store that resolves one model per crop and nutrient.

pub mod error;
pub mod linear;
pub mod store;

pub use error::{ModelError, Result};
pub use linear::LinearExogenousModel;
pub use store::{model_file_name, ModelStore};
