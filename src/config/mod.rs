pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use crate::domain::model::UnitSystem;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bmi")]
#[command(about = "Calculate your Body Mass Index with health guidance")]
pub struct CliConfig {
    /// Height in centimetres (metric) or inches (imperial)
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,

    /// Weight in kilograms (metric) or pounds (imperial)
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Unit system: metric or imperial (defaults to the configured one)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub units: Option<UnitSystem>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the configured delay before the result is shown
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies command line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(unit_system) = self.units {
            config.display.unit_system = unit_system;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.display.result_delay_ms = delay_ms;
        }
    }
}
