use crate::core::ConfigProvider;
use crate::domain::model::{MeasurementBounds, UnitSystem};
use crate::utils::error::{BmiError, Result};
use crate::utils::validation::{
    validate_config_bound, validate_non_empty_string, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// Longest cosmetic delay accepted before showing a result.
pub const MAX_RESULT_DELAY_MS: u64 = 10_000;

pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bounds: MeasurementBounds,
    pub display: DisplayConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub unit_system: UnitSystem,
    pub result_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub environment: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            environment: None,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"))
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BmiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BmiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Expands `${VAR}` from the environment; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Environment name reported by the status endpoint.
    ///
    /// An unresolved `${VAR}` placeholder counts as unset.
    pub fn environment(&self) -> String {
        self.server
            .environment
            .as_deref()
            .map(str::trim)
            .filter(|env| !env.is_empty() && !env.contains("${"))
            .map(str::to_string)
            .or_else(|| std::env::var("APP_ENV").ok().filter(|env| !env.is_empty()))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_config_bound("bounds.max_height_cm", self.bounds.max_height_cm)?;
        validate_config_bound("bounds.max_weight_kg", self.bounds.max_weight_kg)?;
        validate_config_bound("bounds.max_height_in", self.bounds.max_height_in)?;
        validate_config_bound("bounds.max_weight_lb", self.bounds.max_weight_lb)?;

        validate_range(
            "display.result_delay_ms",
            self.display.result_delay_ms,
            0,
            MAX_RESULT_DELAY_MS,
        )?;

        validate_non_empty_string("server.bind_address", &self.server.bind_address)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn bounds(&self) -> MeasurementBounds {
        self.bounds
    }

    fn default_unit_system(&self) -> UnitSystem {
        self.display.unit_system
    }

    fn result_delay(&self) -> Duration {
        Duration::from_millis(self.display.result_delay_ms)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[bounds]
max_height_cm = 250.0
max_weight_kg = 400.0
max_height_in = 100.0
max_weight_lb = 880.0

[display]
unit_system = "imperial"
result_delay_ms = 300

[server]
bind_address = "0.0.0.0:8080"
environment = "production"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bounds.max_height_cm, 250.0);
        assert_eq!(config.bounds.max_weight_lb, 880.0);
        assert_eq!(config.default_unit_system(), UnitSystem::Imperial);
        assert_eq!(config.result_delay(), Duration::from_millis(300));
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.environment(), "production");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.bounds, MeasurementBounds::default());
        assert_eq!(config.default_unit_system(), UnitSystem::Metric);
        assert_eq!(config.result_delay(), Duration::ZERO);
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_bounds_section() {
        let config = AppConfig::from_toml_str("[bounds]\nmax_weight_kg = 500.0\n").unwrap();
        assert_eq!(config.bounds.max_weight_kg, 500.0);
        assert_eq!(config.bounds.max_height_cm, 300.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BMI_TEST_ENVIRONMENT", "staging");

        let toml_content = r#"
[server]
environment = "${BMI_TEST_ENVIRONMENT}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.environment.as_deref(), Some("staging"));
        assert_eq!(config.environment(), "staging");

        std::env::remove_var("BMI_TEST_ENVIRONMENT");
    }

    #[test]
    fn test_unresolved_placeholder_is_kept() {
        let toml_content = r#"
[server]
environment = "${BMI_TEST_SURELY_UNSET_VARIABLE}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.server.environment.as_deref(),
            Some("${BMI_TEST_SURELY_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str("[bounds]\nmax_height_cm = 0.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[display]\nresult_delay_ms = 60000\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[server]\nbind_address = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[display]\nunit_system = \"stone\"\n").unwrap_err();
        assert!(matches!(err, BmiError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nunit_system = \"imperial\"\n")
            .unwrap();

        let config = AppConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.display.unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/bmi.toml"))).unwrap_err();
        assert!(matches!(err, BmiError::IoError(_)));
    }
}
