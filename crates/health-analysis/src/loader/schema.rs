//! Fixed column layout of the sensor CSV format.

use polars::prelude::*;
use std::sync::Arc;

pub const PATIENT_ID: &str = "patient_id";
pub const TIMESTAMP: &str = "timestamp";
pub const HEART_RATE: &str = "heart_rate";
pub const BLOOD_PRESSURE_SYSTOLIC: &str = "blood_pressure_systolic";
pub const BLOOD_PRESSURE_DIASTOLIC: &str = "blood_pressure_diastolic";
pub const TEMPERATURE: &str = "temperature";
pub const GLUCOSE_LEVEL: &str = "glucose_level";
pub const SENSOR_ID: &str = "sensor_id";

/// Columns in file order, paired with the dtype each must parse as.
pub const COLUMNS: [(&str, ColumnKind); 8] = [
    (PATIENT_ID, ColumnKind::Text),
    (TIMESTAMP, ColumnKind::Text),
    (HEART_RATE, ColumnKind::Integer),
    (BLOOD_PRESSURE_SYSTOLIC, ColumnKind::Integer),
    (BLOOD_PRESSURE_DIASTOLIC, ColumnKind::Integer),
    (TEMPERATURE, ColumnKind::Float),
    (GLUCOSE_LEVEL, ColumnKind::Integer),
    (SENSOR_ID, ColumnKind::Text),
];

/// Value category of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Float,
}

impl ColumnKind {
    pub fn dtype(self) -> DataType {
        match self {
            ColumnKind::Text => DataType::String,
            ColumnKind::Integer => DataType::Int32,
            ColumnKind::Float => DataType::Float64,
        }
    }
}

/// Build the polars schema handed to the CSV reader. No inference is done.
pub fn reading_schema() -> SchemaRef {
    let mut schema = Schema::with_capacity(COLUMNS.len());
    for (name, kind) in COLUMNS {
        schema.with_column(name.into(), kind.dtype());
    }
    Arc::new(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_column_order() {
        let schema = reading_schema();
        let names: Vec<&str> = schema.iter_names().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "patient_id",
                "timestamp",
                "heart_rate",
                "blood_pressure_systolic",
                "blood_pressure_diastolic",
                "temperature",
                "glucose_level",
                "sensor_id",
            ]
        );
    }

    #[test]
    fn test_schema_dtypes() {
        let schema = reading_schema();
        assert_eq!(schema.get(HEART_RATE), Some(&DataType::Int32));
        assert_eq!(schema.get(TEMPERATURE), Some(&DataType::Float64));
        assert_eq!(schema.get(SENSOR_ID), Some(&DataType::String));
    }
}
