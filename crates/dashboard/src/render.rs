//! Plain-text rendering for the terminal.

use std::fmt::Write;

use crate::config::DashboardConfig;
use crate::report::{CropReport, NutrientOutcome};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        Some(_) => "n/a".to_string(),
        None => "-".to_string(),
    }
}

/// Configured crops with their thresholds, one line each.
pub fn render_crops(config: &DashboardConfig) -> String {
    let mut out = String::new();
    for crop in &config.crops {
        let levels: Vec<String> = config
            .nutrients
            .iter()
            .map(|&n| format!("{} {}", n, fmt_value(config.thresholds.threshold(&crop.key, n))))
            .collect();
        let _ = writeln!(
            out,
            "{:<14} {:<14} {}",
            crop.key,
            crop.display_name,
            levels.join("  ")
        );
    }
    out
}

/// Full crop report.
pub fn render_report(report: &CropReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} Dashboard", report.display_name);
    let _ = writeln!(
        out,
        "Last update: {}",
        report.latest.timestamp.format(TIME_FORMAT)
    );
    for reading in &report.latest.readings {
        let _ = writeln!(out, "  {:<14} {}", reading.field, fmt_value(reading.value));
    }

    let _ = writeln!(
        out,
        "\nEnvironmental conditions (last {} hours)",
        report.window_hours
    );
    for series in &report.environment {
        let values: Vec<f64> = series
            .points
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .collect();
        let min = values.iter().copied().reduce(f64::min);
        let max = values.iter().copied().reduce(f64::max);
        let _ = writeln!(
            out,
            "  {:<14} {} readings, min {}, max {}",
            series.field,
            series.points.len(),
            fmt_value(min),
            fmt_value(max)
        );
    }

    let _ = writeln!(
        out,
        "\nNutrient forecast (last {}h + next {} steps)",
        report.window_hours, report.horizon_steps
    );
    for nutrient in &report.nutrients {
        let _ = writeln!(
            out,
            "  {} (threshold {})",
            nutrient.nutrient,
            fmt_value(nutrient.threshold)
        );
        match &nutrient.outcome {
            NutrientOutcome::NoModel => {
                let _ = writeln!(out, "    No model for {}", nutrient.nutrient);
            }
            NutrientOutcome::Failed { message } => {
                let _ = writeln!(out, "    Forecast error for {}: {}", nutrient.nutrient, message);
            }
            NutrientOutcome::Forecast { forecast, alert } => {
                for point in forecast.iter() {
                    let _ = writeln!(
                        out,
                        "    {}  {}",
                        point.timestamp.format(TIME_FORMAT),
                        fmt_value(Some(point.value))
                    );
                }
                if let Some(alert) = alert {
                    let _ = writeln!(out, "    WARNING: {}", alert.message);
                }
            }
        }
    }

    out
}
