//! Sensor row model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One timestamped reading; `values` align with the owning table's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRow {
    pub timestamp: NaiveDateTime,
    pub values: Vec<f64>,
}

impl SensorRow {
    pub fn new(timestamp: NaiveDateTime, values: Vec<f64>) -> Self {
        Self { timestamp, values }
    }

    /// Copy of this row moved to another timestamp, every value carried forward.
    pub fn carried_to(&self, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            values: self.values.clone(),
        }
    }
}
