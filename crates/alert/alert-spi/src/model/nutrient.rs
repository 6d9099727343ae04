//! Soil macronutrients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// Nitrogen, phosphorus or potassium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    N,
    P,
    K,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::N, Nutrient::P, Nutrient::K];

    /// Column name in sensor files and model file suffix.
    pub fn symbol(self) -> &'static str {
        match self {
            Nutrient::N => "N",
            Nutrient::P => "P",
            Nutrient::K => "K",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Nutrient::N => "Nitrogen",
            Nutrient::P => "Phosphorus",
            Nutrient::K => "Potassium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Nutrient {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "nitrogen" => Ok(Nutrient::N),
            "p" | "phosphorus" => Ok(Nutrient::P),
            "k" | "potassium" => Ok(Nutrient::K),
            _ => Err(AlertError::UnknownNutrient(s.to_string())),
        }
    }
}
