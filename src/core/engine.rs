use crate::core::calculator::{
    calculate_bmi, classify, gauge_position, health_score, ideal_weight_range,
};
use crate::core::categories::category_info;
use crate::domain::model::{BmiReport, BmiResult, Measurement, MeasurementBounds, ScoreBand};
use crate::domain::ports::{Clock, ConfigProvider, SystemClock};
use crate::utils::error::Result;

/// Entry point for turning a measurement into a result.
///
/// Holds only immutable settings, so one engine can serve any number of
/// callers without locking.
#[derive(Debug, Clone)]
pub struct BmiEngine<C: Clock = SystemClock> {
    bounds: MeasurementBounds,
    clock: C,
}

impl BmiEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_bounds(MeasurementBounds::default())
    }

    pub fn with_bounds(bounds: MeasurementBounds) -> Self {
        Self {
            bounds,
            clock: SystemClock,
        }
    }

    pub fn from_config<P: ConfigProvider>(config: &P) -> Self {
        Self::with_bounds(config.bounds())
    }
}

impl Default for BmiEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BmiEngine<C> {
    pub fn with_clock(bounds: MeasurementBounds, clock: C) -> Self {
        Self { bounds, clock }
    }

    pub fn bounds(&self) -> &MeasurementBounds {
        &self.bounds
    }

    pub fn build_result(&self, measurement: &Measurement) -> Result<BmiResult> {
        self.bounds.check(measurement)?;

        let bmi = calculate_bmi(
            measurement.height,
            measurement.weight,
            measurement.unit_system,
        )?;
        let category = classify(bmi);

        tracing::debug!(
            bmi,
            category = %category,
            unit_system = %measurement.unit_system,
            "BMI calculated"
        );

        Ok(BmiResult {
            bmi,
            category,
            measurement: *measurement,
            computed_at: self.clock.now(),
        })
    }

    /// [`build_result`](Self::build_result) plus the advisory values shown
    /// next to it.
    pub fn build_report(&self, measurement: &Measurement) -> Result<BmiReport> {
        let result = self.build_result(measurement)?;
        let ideal_weight = ideal_weight_range(measurement.height, measurement.unit_system)?;
        let score = health_score(result.bmi);

        Ok(BmiReport {
            category_info: category_info(result.category),
            ideal_weight,
            health_score: score,
            score_band: ScoreBand::from_score(score),
            gauge_position: gauge_position(result.bmi),
            result,
        })
    }
}
