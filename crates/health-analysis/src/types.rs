use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of sensor data for one patient at one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub patient_id: String,
    /// Kept as written in the source file; never parsed into a date.
    pub timestamp: String,
    pub heart_rate: i32,
    pub blood_pressure_systolic: i32,
    pub blood_pressure_diastolic: i32,
    pub temperature: f64,
    pub glucose_level: i32,
    pub sensor_id: String,
}

/// All readings loaded from one input source, in file row order.
///
/// Every reading is fully populated; there is no missing-value marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }
}

impl FromIterator<Reading> for Dataset {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mean values of the monitored columns. All zero for an empty dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub avg_heart_rate: f64,
    pub avg_systolic_bp: f64,
    pub avg_glucose: f64,
}

/// Number of readings strictly above each clinical threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbnormalCounts {
    pub high_heart_rate: usize,
    pub high_blood_pressure: usize,
    pub high_glucose: usize,
}

/// Machine-readable summary of a completed run, emitted by `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Timestamp when the summary was generated
    pub generated_at: String,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub total_readings: usize,
    pub statistics: Statistics,
    pub abnormal_counts: AbnormalCounts,
}


#[cfg(test)]
mod tests {
    use super::fixtures::reading;
    use super::*;

    #[test]
    fn test_dataset_preserves_order() {
        let dataset: Dataset = vec![reading(70, 120, 90), reading(95, 135, 115)]
            .into_iter()
            .collect();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.readings()[0].heart_rate, 70);
        assert_eq!(dataset.readings()[1].heart_rate, 95);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.iter().count(), 0);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = AnalysisSummary {
            generated_at: "2024-01-15 08:00:00".to_string(),
            input_file: PathBuf::from("health_data.csv"),
            output_file: PathBuf::from("output/analysis_report.txt"),
            total_readings: 3,
            statistics: Statistics {
                avg_heart_rate: 93.3,
                avg_systolic_bp: 126.7,
                avg_glucose: 103.3,
            },
            abnormal_counts: AbnormalCounts {
                high_heart_rate: 2,
                high_blood_pressure: 1,
                high_glucose: 1,
            },
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_readings"], 3);
        assert_eq!(json["abnormal_counts"]["high_heart_rate"], 2);
        assert_eq!(json["statistics"]["avg_heart_rate"], 93.3);
    }
}
