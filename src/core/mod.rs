pub mod calculator;
pub mod categories;
pub mod engine;
pub mod units;

pub use crate::domain::model::{
    BmiReport, BmiResult, CategoryInfo, CategoryTag, Measurement, MeasurementBounds, UnitSystem,
    WeightRange,
};
pub use crate::domain::ports::{Clock, ConfigProvider, SystemClock};
pub use crate::utils::error::Result;
