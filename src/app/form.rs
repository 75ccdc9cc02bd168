use crate::core::engine::BmiEngine;
use crate::domain::model::{BmiReport, Measurement, UnitSystem};
use crate::domain::ports::Clock;
use crate::utils::error::{BmiError, Result};
use crate::utils::validation::{parse_measurement_field, validate_upper_bound};
use std::time::Duration;

/// Raw height/weight text as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiForm {
    pub height: String,
    pub weight: String,
    pub unit_system: UnitSystem,
}

impl BmiForm {
    pub fn new(
        height: impl Into<String>,
        weight: impl Into<String>,
        unit_system: UnitSystem,
    ) -> Self {
        Self {
            height: height.into(),
            weight: weight.into(),
            unit_system,
        }
    }

    /// Every field-level problem, not just the first, checked against the
    /// engine's bounds.
    pub fn field_errors<C: Clock>(&self, engine: &BmiEngine<C>) -> Vec<BmiError> {
        let (max_height, max_weight) = engine.bounds().limits_for(self.unit_system);
        let fields = [
            ("height", &self.height, max_height, self.unit_system.height_unit()),
            ("weight", &self.weight, max_weight, self.unit_system.weight_unit()),
        ];

        fields
            .into_iter()
            .filter_map(|(field, raw, max, unit)| {
                parse_measurement_field(field, raw)
                    .and_then(|value| validate_upper_bound(field, value, max, unit))
                    .err()
            })
            .collect()
    }

    pub fn to_measurement(&self) -> Result<Measurement> {
        let height = parse_measurement_field("height", &self.height)?;
        let weight = parse_measurement_field("weight", &self.weight)?;
        Ok(Measurement::new(height, weight, self.unit_system))
    }

    /// Validates, waits `delay` so the result does not appear instantly, then
    /// builds the report.
    pub async fn submit<C: Clock>(
        &self,
        engine: &BmiEngine<C>,
        delay: Duration,
    ) -> Result<BmiReport> {
        let measurement = self.to_measurement()?;

        if !delay.is_zero() {
            tracing::debug!("Delaying result by {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        engine.build_report(&measurement)
    }

    pub fn reset(&mut self) {
        self.height.clear();
        self.weight.clear();
    }
}
