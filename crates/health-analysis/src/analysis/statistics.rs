//! Mean values of the monitored columns.

use crate::types::{Dataset, Reading, Statistics};

pub struct StatisticsCalculator;

impl StatisticsCalculator {
    /// Compute the arithmetic mean of heart rate, systolic pressure and glucose.
    ///
    /// An empty dataset yields all zeros rather than NaN.
    pub fn calculate(dataset: &Dataset) -> Statistics {
        if dataset.is_empty() {
            return Statistics::default();
        }

        let n = dataset.len() as f64;
        Statistics {
            avg_heart_rate: sum(dataset, |r| r.heart_rate) / n,
            avg_systolic_bp: sum(dataset, |r| r.blood_pressure_systolic) / n,
            avg_glucose: sum(dataset, |r| r.glucose_level) / n,
        }
    }
}

fn sum(dataset: &Dataset, field: impl Fn(&Reading) -> i32) -> f64 {
    dataset.iter().map(|r| f64::from(field(r))).sum()
}
