//! Aggregations over a loaded dataset.
//!
//! Both calculators are total: any dataset, including an empty one, yields a
//! value without error.

mod abnormal;
mod statistics;

pub use abnormal::{
    AbnormalityDetector, ClinicalThresholds, GLUCOSE_THRESHOLD, HEART_RATE_THRESHOLD,
    SYSTOLIC_BP_THRESHOLD,
};
pub use statistics::StatisticsCalculator;
