//! CSV loading into a typed [`Dataset`].

use super::schema::{
    BLOOD_PRESSURE_DIASTOLIC, BLOOD_PRESSURE_SYSTOLIC, GLUCOSE_LEVEL, HEART_RATE, PATIENT_ID,
    SENSOR_ID, TEMPERATURE, TIMESTAMP, reading_schema,
};
use crate::error::LoadError;
use crate::types::{Dataset, Reading};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Loads sensor CSV files with one header row and the fixed 8-column layout.
pub struct DataLoader;

impl DataLoader {
    /// Read the whole file at `path` and parse it into a [`Dataset`].
    ///
    /// The header line is skipped without being inspected. Any row that does
    /// not parse against the schema fails the entire load.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
        let path = path.as_ref();
        info!("Loading dataset from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let dataset = Self::parse(&content)?;

        info!("Dataset loaded successfully: {} readings", dataset.len());
        Ok(dataset)
    }

    /// Parse CSV text (header line included) into a [`Dataset`].
    ///
    /// Blank lines anywhere after the header are ignored. Empty text cells
    /// are kept as empty strings; empty numeric cells fail the load.
    pub fn parse(content: &str) -> Result<Dataset, LoadError> {
        let body: Vec<&str> = content
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .collect();

        if body.is_empty() {
            debug!("No data rows after header");
            return Ok(Dataset::default());
        }

        let parse_options = CsvParseOptions::default()
            .with_quote_char(None)
            .with_missing_is_null(false);

        let frame = CsvReadOptions::default()
            .with_has_header(false)
            .with_schema(Some(reading_schema()))
            .with_parse_options(parse_options)
            .into_reader_with_file_handle(Cursor::new(body.join("\n")))
            .finish()?;

        debug!("Parsed frame shape: {:?}", frame.shape());
        frame_to_dataset(&frame)
    }
}

/// Convert a frame produced with [`reading_schema`] into typed readings.
fn frame_to_dataset(frame: &DataFrame) -> Result<Dataset, LoadError> {
    let patient_ids = frame.column(PATIENT_ID)?.as_materialized_series().str()?;
    let timestamps = frame.column(TIMESTAMP)?.as_materialized_series().str()?;
    let heart_rates = frame.column(HEART_RATE)?.as_materialized_series().i32()?;
    let systolic = frame
        .column(BLOOD_PRESSURE_SYSTOLIC)?
        .as_materialized_series()
        .i32()?;
    let diastolic = frame
        .column(BLOOD_PRESSURE_DIASTOLIC)?
        .as_materialized_series()
        .i32()?;
    let temperatures = frame.column(TEMPERATURE)?.as_materialized_series().f64()?;
    let glucose = frame.column(GLUCOSE_LEVEL)?.as_materialized_series().i32()?;
    let sensor_ids = frame.column(SENSOR_ID)?.as_materialized_series().str()?;

    (0..frame.height())
        .map(|idx| -> Result<Reading, LoadError> {
            let row = idx + 1;
            Ok(Reading {
                patient_id: required(patient_ids.get(idx), PATIENT_ID, row)?.to_string(),
                timestamp: required(timestamps.get(idx), TIMESTAMP, row)?.to_string(),
                heart_rate: required(heart_rates.get(idx), HEART_RATE, row)?,
                blood_pressure_systolic: required(systolic.get(idx), BLOOD_PRESSURE_SYSTOLIC, row)?,
                blood_pressure_diastolic: required(
                    diastolic.get(idx),
                    BLOOD_PRESSURE_DIASTOLIC,
                    row,
                )?,
                temperature: required(temperatures.get(idx), TEMPERATURE, row)?,
                glucose_level: required(glucose.get(idx), GLUCOSE_LEVEL, row)?,
                sensor_id: required(sensor_ids.get(idx), SENSOR_ID, row)?.to_string(),
            })
        })
        .collect()
}

fn required<T>(value: Option<T>, column: &'static str, row: usize) -> Result<T, LoadError> {
    value.ok_or(LoadError::MissingValue { column, row })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "patient_id,timestamp,heart_rate,blood_pressure_systolic,\
                          blood_pressure_diastolic,temperature,glucose_level,sensor_id";

    fn csv(rows: &[&str]) -> String {
        let mut lines = vec![HEADER];
        lines.extend_from_slice(rows);
        lines.join("\n")
    }

    #[test]
    fn test_parse_typed_rows_in_order() {
        let content = csv(&[
            "P001,2024-01-15T08:00:00,85,120,80,36.6,90,S01",
            "P002,2024-01-15T08:05:00,95,135,88,37.2,115,S02",
        ]);

        let dataset = DataLoader::parse(&content).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.readings()[0];
        assert_eq!(first.patient_id, "P001");
        assert_eq!(first.timestamp, "2024-01-15T08:00:00");
        assert_eq!(first.heart_rate, 85);
        assert_eq!(first.blood_pressure_systolic, 120);
        assert_eq!(first.blood_pressure_diastolic, 80);
        assert!((first.temperature - 36.6).abs() < 1e-9);
        assert_eq!(first.glucose_level, 90);
        assert_eq!(first.sensor_id, "S01");
        assert_eq!(dataset.readings()[1].patient_id, "P002");
    }

    #[test]
    fn test_header_is_not_validated() {
        let content = "a,b,c\nP001,2024-01-15T08:00:00,85,120,80,36.6,90,S01\n";
        let dataset = DataLoader::parse(content).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        let dataset = DataLoader::parse(&format!("{HEADER}\n")).unwrap();
        assert!(dataset.is_empty());

        let dataset = DataLoader::parse(HEADER).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_empty_content_is_empty() {
        assert!(DataLoader::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let content = csv(&["P001,2024-01-15T08:00:00,fast,120,80,36.6,90,S01"]);
        let result = DataLoader::parse(&content);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_empty_numeric_field_fails() {
        let content = csv(&[
            "P001,2024-01-15T08:00:00,85,120,80,36.6,90,S01",
            "P002,2024-01-15T08:05:00,,135,88,37.2,115,S02",
        ]);

        assert!(DataLoader::parse(&content).is_err());
    }

    #[test]
    fn test_empty_text_fields_are_empty_strings() {
        let content = csv(&["P001,,85,120,80,36.6,90,"]);

        let dataset = DataLoader::parse(&content).unwrap();

        let reading = &dataset.readings()[0];
        assert_eq!(reading.patient_id, "P001");
        assert_eq!(reading.timestamp, "");
        assert_eq!(reading.sensor_id, "");
        assert_eq!(reading.heart_rate, 85);
    }

    #[test]
    fn test_trailing_blank_lines_are_ignored() {
        let content = format!(
            "{}\n\n\n",
            csv(&["P001,2024-01-15T08:00:00,85,120,80,36.6,90,S01"])
        );

        let dataset = DataLoader::parse(&content).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_blank_lines_between_rows_are_ignored() {
        let content = csv(&[
            "",
            "P001,2024-01-15T08:00:00,85,120,80,36.6,90,S01",
            "   ",
            "",
            "P002,2024-01-15T08:05:00,95,135,88,37.2,115,S02",
        ]);

        let dataset = DataLoader::parse(&content).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.readings()[0].patient_id, "P001");
        assert_eq!(dataset.readings()[1].patient_id, "P002");
    }

    #[test]
    fn test_short_row_fails() {
        let content = csv(&["P001,2024-01-15T08:00:00,85,120"]);
        assert!(DataLoader::parse(&content).is_err());
    }

    #[test]
    fn test_extra_field_fails() {
        let content = csv(&["P001,2024-01-15T08:00:00,85,120,80,36.6,90,S01,extra"]);
        assert!(DataLoader::parse(&content).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DataLoader::load("definitely/not/here/health_data.csv");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
