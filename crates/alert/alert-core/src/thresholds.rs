//! Minimum acceptable nutrient levels per crop.

use std::collections::BTreeMap;

use alert_spi::{AlertError, Nutrient, Result};
use serde::{Deserialize, Serialize};

type CropLevels = BTreeMap<String, BTreeMap<Nutrient, f64>>;

/// Crop key -> nutrient -> minimum level
///
/// Crop keys are stored lowercase, including keys read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CropLevels", into = "CropLevels")]
pub struct ThresholdTable {
    crops: CropLevels,
}

impl From<CropLevels> for ThresholdTable {
    fn from(raw: CropLevels) -> Self {
        let mut crops = CropLevels::new();
        for (crop, levels) in raw {
            crops.entry(crop.to_lowercase()).or_default().extend(levels);
        }
        Self { crops }
    }
}

impl From<ThresholdTable> for CropLevels {
    fn from(table: ThresholdTable) -> Self {
        table.crops
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (crop, n, p, k) in [
            ("coffee", 200.0, 190.0, 180.0),
            ("durian", 255.0, 218.0, 155.0),
            ("blackpepper", 150.0, 190.0, 140.0),
        ] {
            let levels = table.crops.entry(crop.to_string()).or_default();
            levels.insert(Nutrient::N, n);
            levels.insert(Nutrient::P, p);
            levels.insert(Nutrient::K, k);
        }
        table
    }
}

impl ThresholdTable {
    pub fn empty() -> Self {
        Self {
            crops: BTreeMap::new(),
        }
    }

    /// Set one threshold. Values must be finite.
    pub fn insert(&mut self, crop: &str, nutrient: Nutrient, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(AlertError::InvalidThreshold {
                crop: crop.to_string(),
                nutrient: nutrient.to_string(),
                value,
            });
        }
        self.crops
            .entry(crop.to_lowercase())
            .or_default()
            .insert(nutrient, value);
        Ok(())
    }

    /// Threshold for `crop` / `nutrient`, if configured. Crop keys are
    /// case-insensitive.
    pub fn threshold(&self, crop: &str, nutrient: Nutrient) -> Option<f64> {
        self.crops
            .get(&crop.to_lowercase())
            .and_then(|levels| levels.get(&nutrient))
            .copied()
    }

    /// All thresholds for one crop.
    pub fn for_crop(&self, crop: &str) -> Result<&BTreeMap<Nutrient, f64>> {
        self.crops
            .get(&crop.to_lowercase())
            .ok_or_else(|| AlertError::UnknownCrop(crop.to_string()))
    }

    pub fn crops(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }

    /// Check every value is finite, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        for (crop, levels) in &self.crops {
            for (nutrient, value) in levels {
                if !value.is_finite() {
                    return Err(AlertError::InvalidThreshold {
                        crop: crop.clone(),
                        nutrient: nutrient.to_string(),
                        value: *value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let table = ThresholdTable::default();
        assert_eq!(table.threshold("coffee", Nutrient::N), Some(200.0));
        assert_eq!(table.threshold("coffee", Nutrient::P), Some(190.0));
        assert_eq!(table.threshold("coffee", Nutrient::K), Some(180.0));
        assert_eq!(table.threshold("durian", Nutrient::N), Some(255.0));
        assert_eq!(table.threshold("durian", Nutrient::P), Some(218.0));
        assert_eq!(table.threshold("durian", Nutrient::K), Some(155.0));
        assert_eq!(table.threshold("blackpepper", Nutrient::N), Some(150.0));
        assert_eq!(table.threshold("blackpepper", Nutrient::P), Some(190.0));
        assert_eq!(table.threshold("blackpepper", Nutrient::K), Some(140.0));

        let crops: Vec<&str> = table.crops().collect();
        assert_eq!(crops, vec!["blackpepper", "coffee", "durian"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = ThresholdTable::default();
        assert_eq!(table.threshold("Coffee", Nutrient::K), Some(180.0));
        assert!(table.threshold("mango", Nutrient::K).is_none());
    }

    #[test]
    fn test_for_crop() {
        let table = ThresholdTable::default();
        assert_eq!(table.for_crop("durian").unwrap().len(), 3);
        assert_eq!(
            table.for_crop("mango"),
            Err(AlertError::UnknownCrop("mango".to_string()))
        );
    }

    #[test]
    fn test_insert_rejects_non_finite() {
        let mut table = ThresholdTable::empty();
        assert!(table.insert("tea", Nutrient::N, f64::INFINITY).is_err());
        table.insert("Tea", Nutrient::N, 120.0).unwrap();
        assert_eq!(table.threshold("tea", Nutrient::N), Some(120.0));
    }

    #[test]
    fn test_json_shape() {
        let table: ThresholdTable =
            serde_json::from_str(r#"{"tea": {"N": 120, "K": 90.5}}"#).unwrap();
        assert!(table.validate().is_ok());
        assert_eq!(table.threshold("tea", Nutrient::K), Some(90.5));
        assert!(table.threshold("tea", Nutrient::P).is_none());

        let json = serde_json::to_value(ThresholdTable::default()).unwrap();
        assert_eq!(json["coffee"]["N"], 200.0);
    }

    #[test]
    fn test_json_keys_are_case_insensitive() {
        let table: ThresholdTable =
            serde_json::from_str(r#"{"Tea": {"N": 120}, "tea": {"K": 90}}"#).unwrap();

        assert_eq!(table.threshold("Tea", Nutrient::N), Some(120.0));
        assert_eq!(table.threshold("tea", Nutrient::K), Some(90.0));
        assert_eq!(table.crops().collect::<Vec<_>>(), vec!["tea"]);
        assert_eq!(table.for_crop("TEA").unwrap().len(), 2);
    }
}
