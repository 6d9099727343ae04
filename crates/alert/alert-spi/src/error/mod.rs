//! Error types for threshold alerts.

mod alert_error;

pub use alert_error::{AlertError, Result};
