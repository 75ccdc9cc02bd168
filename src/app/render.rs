use crate::core::units::{format_height, format_weight};
use crate::domain::model::BmiReport;
use crate::utils::error::Result;

const GAUGE_WIDTH: usize = 40;

const DISCLAIMER: &str = "Note: BMI is a screening tool and is not diagnostic of body fatness or health. \
Consult with a healthcare provider for a comprehensive health assessment.";

pub fn render_json(report: &BmiReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &BmiReport) -> String {
    let result = &report.result;
    let info = report.category_info;
    let unit_system = result.measurement.unit_system;
    let height = format_height(result.measurement.height, unit_system);

    let lines = [
        "Your BMI Result".to_string(),
        format!("  BMI:            {:.1}", result.bmi),
        format!("  Category:       {} (BMI {})", info.label, info.reference_range),
        format!("  Scale:          {}", render_gauge(report.gauge_position)),
        format!("  Height:         {}", height),
        format!(
            "  Weight:         {}",
            format_weight(result.measurement.weight, unit_system)
        ),
        format!("  Unit system:    {}", unit_system),
        String::new(),
        "Health Assessment".to_string(),
        format!(
            "  Health score:   {}/100 - {}",
            report.health_score,
            report.score_band.label()
        ),
        format!("  Details:        {}", info.description),
        format!("  Recommendation: {}", info.recommendation),
        format!(
            "  Ideal weight:   {:.1} - {:.1} {} for {}",
            report.ideal_weight.min,
            report.ideal_weight.max,
            unit_system.weight_unit(),
            height
        ),
        String::new(),
        format!(
            "Calculated on {} at {}",
            result.computed_at.format("%Y-%m-%d"),
            result.computed_at.format("%H:%M:%S UTC")
        ),
        DISCLAIMER.to_string(),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Four equal segments (underweight .. obese) with a `|` marker.
fn render_gauge(position: f64) -> String {
    let marker = ((position / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let marker = marker.min(GAUGE_WIDTH - 1);
    let segment = GAUGE_WIDTH / 4;

    (0..GAUGE_WIDTH)
        .map(|i| {
            if i == marker {
                '|'
            } else {
                match i / segment {
                    0 => 'u',
                    1 => 'n',
                    2 => 'o',
                    _ => 'O',
                }
            }
        })
        .collect::<String>()
}
