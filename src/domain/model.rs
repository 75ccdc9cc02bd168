use crate::utils::error::{BmiError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(BmiError::invalid_measurement(
                "unit system",
                format!("'{}' is not one of metric, imperial", other),
            )),
        }
    }
}

/// Height and weight as entered, in the units of `unit_system`
/// (centimetres and kilograms, or inches and pounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub height: f64,
    pub weight: f64,
    pub unit_system: UnitSystem,
}

impl Measurement {
    pub fn new(height: f64, weight: f64, unit_system: UnitSystem) -> Self {
        Self {
            height,
            weight,
            unit_system,
        }
    }

    pub fn metric(height_cm: f64, weight_kg: f64) -> Self {
        Self::new(height_cm, weight_kg, UnitSystem::Metric)
    }

    pub fn imperial(height_in: f64, weight_lb: f64) -> Self {
        Self::new(height_in, weight_lb, UnitSystem::Imperial)
    }
}

/// Upper plausibility limits per unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementBounds {
    pub max_height_cm: f64,
    pub max_weight_kg: f64,
    pub max_height_in: f64,
    pub max_weight_lb: f64,
}

impl Default for MeasurementBounds {
    fn default() -> Self {
        Self {
            max_height_cm: 300.0,
            max_weight_kg: 1000.0,
            max_height_in: 120.0,
            max_weight_lb: 2200.0,
        }
    }
}

impl MeasurementBounds {
    /// `(max_height, max_weight)` in the units of `unit_system`.
    pub fn limits_for(&self, unit_system: UnitSystem) -> (f64, f64) {
        match unit_system {
            UnitSystem::Metric => (self.max_height_cm, self.max_weight_kg),
            UnitSystem::Imperial => (self.max_height_in, self.max_weight_lb),
        }
    }

    pub fn check(&self, measurement: &Measurement) -> Result<()> {
        use crate::utils::validation::{validate_positive, validate_upper_bound};

        let unit_system = measurement.unit_system;
        let (max_height, max_weight) = self.limits_for(unit_system);

        validate_positive("height", measurement.height)?;
        validate_upper_bound(
            "height",
            measurement.height,
            max_height,
            unit_system.height_unit(),
        )?;
        validate_positive("weight", measurement.weight)?;
        validate_upper_bound(
            "weight",
            measurement.weight,
            max_weight,
            unit_system.weight_unit(),
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl CategoryTag {
    /// All tags in ascending threshold order.
    pub const ALL: [CategoryTag; 4] = [
        CategoryTag::Underweight,
        CategoryTag::Normal,
        CategoryTag::Overweight,
        CategoryTag::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Underweight => "underweight",
            CategoryTag::Normal => "normal",
            CategoryTag::Overweight => "overweight",
            CategoryTag::Obese => "obese",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryTag {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self> {
        CategoryTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BmiError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub category: CategoryTag,
    pub label: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub range_min: f64,
    /// `None` for the open-ended top category.
    pub range_max: Option<f64>,
    pub reference_range: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    pub bmi: f64,
    pub category: CategoryTag,
    pub measurement: Measurement,
    pub computed_at: DateTime<Utc>,
}

/// Weight interval in the display units of `unit_system`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
    pub unit_system: UnitSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => ScoreBand::Excellent,
            70..=84 => ScoreBand::Good,
            50..=69 => ScoreBand::Fair,
            _ => ScoreBand::NeedsAttention,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsAttention => "Needs Attention",
        }
    }
}

/// Everything the presentation layer needs to render one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiReport {
    pub result: BmiResult,
    pub category_info: &'static CategoryInfo,
    pub ideal_weight: WeightRange,
    pub health_score: u8,
    pub score_band: ScoreBand,
    /// Marker position on a 0-40 BMI gauge, in percent.
    pub gauge_position: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!(" Imperial ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("stone".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_bounds_check() {
        let bounds = MeasurementBounds::default();
        assert!(bounds.check(&Measurement::metric(300.0, 1000.0)).is_ok());
        assert!(bounds.check(&Measurement::metric(301.0, 70.0)).is_err());
        assert!(bounds.check(&Measurement::metric(170.0, 1000.5)).is_err());
        assert!(bounds.check(&Measurement::imperial(120.0, 2200.0)).is_ok());
        assert!(bounds.check(&Measurement::imperial(121.0, 154.0)).is_err());

        let err = bounds.check(&Measurement::metric(170.0, -5.0)).unwrap_err();
        assert!(matches!(err, BmiError::InvalidMeasurement { ref field, .. } if field == "weight"));
    }

    #[test]
    fn test_category_tag_order() {
        assert!(CategoryTag::Underweight < CategoryTag::Normal);
        assert!(CategoryTag::Normal < CategoryTag::Overweight);
        assert!(CategoryTag::Overweight < CategoryTag::Obese);
    }

    #[test]
    fn test_category_tag_from_str() {
        assert_eq!("normal".parse::<CategoryTag>().unwrap(), CategoryTag::Normal);
        assert_eq!("OBESE".parse::<CategoryTag>().unwrap(), CategoryTag::Obese);

        let err = "morbid".parse::<CategoryTag>().unwrap_err();
        assert!(matches!(err, BmiError::UnknownCategory { name } if name == "morbid"));
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(85), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(84), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(30), ScoreBand::NeedsAttention);
        assert_eq!(ScoreBand::from_score(10), ScoreBand::NeedsAttention);
    }

    #[test]
    fn test_measurement_serializes_camel_case() {
        let json = serde_json::to_value(Measurement::imperial(67.0, 154.0)).unwrap();
        assert_eq!(json["unitSystem"], "imperial");
        assert_eq!(json["height"], 67.0);
    }
}
