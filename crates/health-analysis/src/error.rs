//! Custom error types for the health sensor analysis pipeline.
//!
//! Only two stages can fail: loading the input file and writing the report.
//! Statistics, abnormality detection and rendering are total over any
//! loaded dataset, so they have no error variants here.
//!
//! Errors are serializable so a run failure can be emitted as JSON next to
//! (or instead of) the human-readable diagnostic.

use crate::config::ConfigValidationError;
use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a dataset could not be loaded from its source file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A row did not match the fixed schema (bad number, extra field).
    #[error("{0}")]
    Parse(#[from] polars::error::PolarsError),

    /// A cell was empty or the row was too short.
    #[error("missing value for column '{column}' in data row {row}")]
    MissingValue { column: &'static str, row: usize },
}

/// The main error type for an analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input could not be turned into a dataset; nothing was written.
    #[error("Error loading data from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// The report was computed but could not be delivered.
    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}

impl AnalysisError {
    /// Wrap a [`LoadError`] with the path it came from.
    pub fn load(path: impl Into<PathBuf>, source: LoadError) -> Self {
        AnalysisError::Load {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O error raised while persisting the report.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisError::Write {
            path: path.into(),
            source,
        }
    }

    /// Get a stable error code for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LOAD_ERROR",
            Self::Write { .. } => "WRITE_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }

    /// Check if the run stopped before anything was computed.
    ///
    /// Load failures are handled at the top level: a diagnostic is printed
    /// and the process ends without a report.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
