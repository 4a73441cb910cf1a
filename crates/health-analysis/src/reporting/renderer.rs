use crate::analysis::{GLUCOSE_THRESHOLD, HEART_RATE_THRESHOLD, SYSTOLIC_BP_THRESHOLD};
use crate::types::{AbnormalCounts, Statistics};

pub const REPORT_TITLE: &str = "Health Sensor Data Analysis Report";

/// Number of `=` characters in the separator lines.
pub const SEPARATOR_WIDTH: usize = 40;

pub struct ReportRenderer;

impl ReportRenderer {
    /// Render the text report.
    ///
    /// Lines are joined with `\n` and there is no trailing newline. Averages
    /// are shown with one decimal, rounding halves away from zero.
    pub fn render(stats: &Statistics, abnormal: &AbnormalCounts, total_readings: usize) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);

        let lines = [
            REPORT_TITLE.to_string(),
            separator.clone(),
            format!("Total readings: {}", total_readings),
            String::new(),
            "Averages:".to_string(),
            format!(
                "  - Heart Rate (avg): {} bpm",
                one_decimal(stats.avg_heart_rate)
            ),
            format!(
                "  - Systolic BP (avg): {} mmHg",
                one_decimal(stats.avg_systolic_bp)
            ),
            format!("  - Glucose (avg): {} mg/dL", one_decimal(stats.avg_glucose)),
            String::new(),
            "Abnormal reading counts:".to_string(),
            format!(
                "  - High heart rate (>{}): {}",
                HEART_RATE_THRESHOLD, abnormal.high_heart_rate
            ),
            format!(
                "  - High systolic BP (>{}): {}",
                SYSTOLIC_BP_THRESHOLD, abnormal.high_blood_pressure
            ),
            format!(
                "  - High glucose (>{}): {}",
                GLUCOSE_THRESHOLD, abnormal.high_glucose
            ),
            separator,
        ];

        lines.join("\n")
    }
}

/// Format with exactly one decimal, ties rounded away from zero.
///
/// `{:.1}` alone rounds exact ties to even (75.25 -> "75.2").
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
