use crate::domain::model::{MeasurementBounds, UnitSystem};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Source of the `computed_at` timestamp stamped on every result.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bounds(&self) -> MeasurementBounds;
    fn default_unit_system(&self) -> UnitSystem;
    fn result_delay(&self) -> Duration;
}
