//! Unit conversion constants and display formatting.
//!
//! The engine computes in metric; these helpers are only used where imperial
//! input enters or where values leave for display.

use crate::domain::model::UnitSystem;

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.2046226;

/// Conversion factor of the imperial BMI formula (`703 * lb / in^2`).
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

pub const CM_PER_METER: f64 = 100.0;

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Round half away from zero at the tenths digit.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Height in metres for a height given in the units of `unit_system`.
pub fn height_in_meters(height: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => height / CM_PER_METER,
        UnitSystem::Imperial => inches_to_cm(height) / CM_PER_METER,
    }
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// One decimal at most, no trailing `.0`.
pub fn format_number(value: f64) -> String {
    format!("{}", round_to_tenth(value))
}

pub fn format_height(height: f64, unit_system: UnitSystem) -> String {
    match unit_system {
        UnitSystem::Metric => format!("{} cm", format_number(height)),
        UnitSystem::Imperial => {
            let total = round_to_tenth(height);
            let feet = (total / INCHES_PER_FOOT).floor();
            let inches = round_to_tenth(total - feet * INCHES_PER_FOOT);
            format!("{}'{}\"", feet, format_number(inches))
        }
    }
}

pub fn format_weight(weight: f64, unit_system: UnitSystem) -> String {
    format!("{} {}", format_number(weight), unit_system.weight_unit())
}
