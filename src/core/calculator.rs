//! Pure BMI arithmetic: formula, classification, ideal range and health score.

use crate::core::categories::CATEGORY_TABLE;
use crate::core::units::{self, IMPERIAL_BMI_FACTOR};
use crate::domain::model::{CategoryTag, UnitSystem, WeightRange};
use crate::utils::error::{BmiError, Result};
use crate::utils::validation::validate_positive;

/// BMI bounds of the ideal weight range.
pub const IDEAL_BMI_MIN: f64 = 18.5;
pub const IDEAL_BMI_MAX: f64 = 24.9;

/// Upper end of the gauge scale; anything above pins the marker at 100%.
pub const GAUGE_MAX_BMI: f64 = 40.0;

/// Half-open `[lower, upper)` BMI bands and their score. Disjoint; any value
/// not covered (below 15, NaN) scores [`FALLBACK_HEALTH_SCORE`].
const HEALTH_SCORE_BANDS: [(f64, f64, u8); 9] = [
    (18.5, 25.0, 100),
    (17.0, 18.5, 85),
    (25.0, 27.0, 85),
    (16.0, 17.0, 70),
    (27.0, 30.0, 70),
    (15.0, 16.0, 50),
    (30.0, 35.0, 50),
    (35.0, 40.0, 30),
    (40.0, f64::INFINITY, 20),
];

const FALLBACK_HEALTH_SCORE: u8 = 10;

/// BMI rounded to one decimal.
///
/// Metric takes centimetres and kilograms, imperial takes inches and pounds.
/// Non-positive or non-finite input is rejected, never clamped.
pub fn calculate_bmi(height: f64, weight: f64, unit_system: UnitSystem) -> Result<f64> {
    validate_positive("height", height)?;
    validate_positive("weight", weight)?;

    let bmi = match unit_system {
        UnitSystem::Metric => {
            let height_m = units::height_in_meters(height, UnitSystem::Metric);
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => IMPERIAL_BMI_FACTOR * weight / (height * height),
    };

    // A vanishingly small height squares to zero.
    if !bmi.is_finite() {
        return Err(BmiError::invalid_measurement("height", "is too small to compute a BMI"));
    }

    Ok(units::round_to_tenth(bmi))
}

/// First category whose upper bound exceeds `bmi`; boundaries belong to the
/// higher category.
pub fn classify(bmi: f64) -> CategoryTag {
    CATEGORY_TABLE
        .iter()
        .find(|info| info.range_max.map_or(true, |max| bmi < max))
        .map(|info| info.category)
        .unwrap_or(CategoryTag::Obese)
}

pub fn ideal_weight_range(height: f64, unit_system: UnitSystem) -> Result<WeightRange> {
    validate_positive("height", height)?;

    let height_m = units::height_in_meters(height, unit_system);
    let min_kg = IDEAL_BMI_MIN * height_m * height_m;
    let max_kg = IDEAL_BMI_MAX * height_m * height_m;

    let (min, max) = match unit_system {
        UnitSystem::Metric => (min_kg, max_kg),
        UnitSystem::Imperial => (units::kg_to_lb(min_kg), units::kg_to_lb(max_kg)),
    };

    Ok(WeightRange {
        min: units::round_to_tenth(min),
        max: units::round_to_tenth(max),
        unit_system,
    })
}

pub fn health_score(bmi: f64) -> u8 {
    HEALTH_SCORE_BANDS
        .iter()
        .find(|(lower, upper, _)| bmi >= *lower && (bmi < *upper || upper.is_infinite()))
        .map(|(_, _, score)| *score)
        .unwrap_or(FALLBACK_HEALTH_SCORE)
}

/// Marker position on a 0-40 BMI gauge, in percent, clamped to `[0, 100]`.
pub fn gauge_position(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return 0.0;
    }
    (bmi / GAUGE_MAX_BMI * 100.0).clamp(0.0, 100.0)
}
