use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmiError {
    #[error("Invalid {field}: {reason}")]
    InvalidMeasurement { field: String, reason: String },

    #[error("Unknown BMI category: {name}")]
    UnknownCategory { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BmiError {
    pub fn invalid_measurement(field: &str, reason: impl Into<String>) -> Self {
        BmiError::InvalidMeasurement {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BmiError::InvalidMeasurement { .. } => ErrorSeverity::Low,
            BmiError::ConfigError { .. } | BmiError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            BmiError::IoError(_) | BmiError::SerializationError(_) => ErrorSeverity::High,
            // classify is total, so this only shows up on a logic fault
            BmiError::UnknownCategory { .. } => ErrorSeverity::Critical,
        }
    }

    /// Whether the caller can recover by asking for different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BmiError::InvalidMeasurement { .. })
    }

    /// Process exit code used by the command line front end.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 3,
            ErrorSeverity::Critical => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BmiError::InvalidMeasurement { field, reason } => {
                format!("{} {}", capitalize(field), reason)
            }
            BmiError::UnknownCategory { .. } => {
                "Something went wrong while classifying your BMI".to_string()
            }
            BmiError::ConfigError { message } => format!("Configuration problem: {}", message),
            BmiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            BmiError::IoError(e) => format!("Could not read or write a file: {}", e),
            BmiError::SerializationError(e) => format!("Could not encode the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BmiError::InvalidMeasurement { .. } => {
                "Enter a positive number within the plausible range for the selected unit system"
            }
            BmiError::UnknownCategory { .. } => "Please report this as a bug",
            BmiError::ConfigError { .. } | BmiError::InvalidConfigValueError { .. } => {
                "Check the configuration file against the documented keys and value ranges"
            }
            BmiError::IoError(_) => "Make sure the file exists and is readable",
            BmiError::SerializationError(_) => "Try the text output format instead",
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, BmiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_measurement_is_recoverable() {
        let err = BmiError::invalid_measurement("height", "must be greater than zero");
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Invalid height: must be greater than zero");
        assert_eq!(err.user_friendly_message(), "Height must be greater than zero");
    }

    #[test]
    fn test_unknown_category_is_critical() {
        let err = BmiError::UnknownCategory {
            name: "morbid".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 4);
    }
}
