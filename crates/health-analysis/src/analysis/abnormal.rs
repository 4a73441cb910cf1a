//! Counts of readings above fixed clinical thresholds.

use crate::types::{AbnormalCounts, Dataset, Reading};

/// Heart rate above this many beats per minute is abnormal.
pub const HEART_RATE_THRESHOLD: i32 = 90;

/// Systolic pressure above this many mmHg is abnormal.
pub const SYSTOLIC_BP_THRESHOLD: i32 = 130;

/// Glucose above this many mg/dL is abnormal.
pub const GLUCOSE_THRESHOLD: i32 = 110;

/// The fixed set of thresholds a reading is checked against.
///
/// Comparisons are strict: a value equal to its threshold is normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicalThresholds {
    pub heart_rate: i32,
    pub systolic_bp: i32,
    pub glucose: i32,
}

impl ClinicalThresholds {
    pub const STANDARD: ClinicalThresholds = ClinicalThresholds {
        heart_rate: HEART_RATE_THRESHOLD,
        systolic_bp: SYSTOLIC_BP_THRESHOLD,
        glucose: GLUCOSE_THRESHOLD,
    };

    pub fn is_high_heart_rate(&self, reading: &Reading) -> bool {
        reading.heart_rate > self.heart_rate
    }

    pub fn is_high_blood_pressure(&self, reading: &Reading) -> bool {
        reading.blood_pressure_systolic > self.systolic_bp
    }

    pub fn is_high_glucose(&self, reading: &Reading) -> bool {
        reading.glucose_level > self.glucose
    }
}

pub struct AbnormalityDetector;

impl AbnormalityDetector {
    /// Count readings strictly above each [`ClinicalThresholds::STANDARD`] limit.
    pub fn detect(dataset: &Dataset) -> AbnormalCounts {
        let thresholds = ClinicalThresholds::STANDARD;
        let count = |pred: fn(&ClinicalThresholds, &Reading) -> bool| {
            dataset.iter().filter(|r| pred(&thresholds, r)).count()
        };

        AbnormalCounts {
            high_heart_rate: count(ClinicalThresholds::is_high_heart_rate),
            high_blood_pressure: count(ClinicalThresholds::is_high_blood_pressure),
            high_glucose: count(ClinicalThresholds::is_high_glucose),
        }
    }
}
