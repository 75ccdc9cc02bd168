pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::app::form::BmiForm;
pub use crate::config::AppConfig;
pub use crate::core::calculator::{
    calculate_bmi, classify, gauge_position, health_score, ideal_weight_range,
};
pub use crate::core::categories::{category_info, category_info_by_name};
pub use crate::core::engine::BmiEngine;
pub use crate::domain::model::{
    BmiReport, BmiResult, CategoryInfo, CategoryTag, Measurement, MeasurementBounds, ScoreBand,
    UnitSystem, WeightRange,
};
pub use crate::utils::error::{BmiError, Result};
