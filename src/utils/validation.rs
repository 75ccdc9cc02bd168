use crate::utils::error::{BmiError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn numeric_input_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // digits with at most one decimal point, nothing else
    PATTERN.get_or_init(|| Regex::new(r"^\d*\.?\d*$").expect("numeric input pattern"))
}

/// Parse a raw form value for a measurement field.
///
/// Accepts plain decimal text only (no sign, no exponent, no unit suffix);
/// surrounding whitespace is ignored.
pub fn parse_measurement_field(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BmiError::invalid_measurement(field_name, "is required"));
    }

    if !numeric_input_pattern().is_match(trimmed) {
        return Err(BmiError::invalid_measurement(field_name, "must be a number"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| BmiError::invalid_measurement(field_name, "must be a number"))?;

    validate_positive(field_name, value)?;
    Ok(value)
}

/// Rejects zero, negatives and non-finite values.
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BmiError::invalid_measurement(field_name, "must be a number"));
    }
    if value <= 0.0 {
        return Err(BmiError::invalid_measurement(
            field_name,
            "must be greater than zero",
        ));
    }
    Ok(())
}

pub fn validate_upper_bound(field_name: &str, value: f64, max: f64, unit: &str) -> Result<()> {
    if value > max {
        return Err(BmiError::invalid_measurement(
            field_name,
            format!("must be at most {} {}", crate::core::units::format_number(max), unit),
        ));
    }
    Ok(())
}

pub fn validate_config_bound(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BmiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Bound must be a positive, finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BmiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BmiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(err: BmiError) -> String {
        match err {
            BmiError::InvalidMeasurement { reason, .. } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_measurement_field() {
        assert_eq!(parse_measurement_field("height", "170").unwrap(), 170.0);
        assert_eq!(parse_measurement_field("weight", " 70.5 ").unwrap(), 70.5);
        assert_eq!(parse_measurement_field("weight", ".5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_measurement_field_rejections() {
        assert_eq!(
            reason_of(parse_measurement_field("height", "").unwrap_err()),
            "is required"
        );
        assert_eq!(
            reason_of(parse_measurement_field("height", "   ").unwrap_err()),
            "is required"
        );
        assert_eq!(
            reason_of(parse_measurement_field("height", "abc").unwrap_err()),
            "must be a number"
        );
        assert_eq!(
            reason_of(parse_measurement_field("height", "-5").unwrap_err()),
            "must be a number"
        );
        assert_eq!(
            reason_of(parse_measurement_field("height", "1e3").unwrap_err()),
            "must be a number"
        );
        assert_eq!(
            reason_of(parse_measurement_field("height", "1.2.3").unwrap_err()),
            "must be a number"
        );
        assert_eq!(
            reason_of(parse_measurement_field("height", ".").unwrap_err()),
            "must be a number"
        );
        assert_eq!(
            reason_of(parse_measurement_field("weight", "0").unwrap_err()),
            "must be greater than zero"
        );
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("weight", 70.0).is_ok());
        assert!(validate_positive("weight", 0.0).is_err());
        assert!(validate_positive("weight", -5.0).is_err());
        assert!(validate_positive("weight", f64::NAN).is_err());
        assert!(validate_positive("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_upper_bound() {
        assert!(validate_upper_bound("height", 300.0, 300.0, "cm").is_ok());
        let err = validate_upper_bound("height", 300.5, 300.0, "cm").unwrap_err();
        assert_eq!(reason_of(err), "must be at most 300 cm");
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.result_delay_ms", 300u64, 0, 10_000).is_ok());
        assert!(validate_range("display.result_delay_ms", 10_001u64, 0, 10_000).is_err());
    }
}
