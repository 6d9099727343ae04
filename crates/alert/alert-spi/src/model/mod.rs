//! Data models for threshold alerts.

mod alert;
mod nutrient;

pub use alert::Alert;
pub use nutrient::Nutrient;
