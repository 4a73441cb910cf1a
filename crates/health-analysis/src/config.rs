//! Configuration types for the analysis pipeline.
//!
//! Only the input and output locations are configurable. The clinical
//! thresholds live in [`crate::analysis::ClinicalThresholds`] as constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "health_data.csv";

/// Default report location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output/analysis_report.txt";

/// Configuration for an analysis run.
///
/// Use [`AnalysisConfig::builder()`] to override individual paths.
///
/// # Example
///
/// ```rust,ignore
/// use health_analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .input_path("data/week_42.csv")
///     .output_path("reports/week_42.txt")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// CSV file with one header row followed by sensor readings.
    /// Default: "health_data.csv"
    pub input_path: PathBuf,

    /// Destination of the rendered report. Parent directories are created.
    /// Default: "output/analysis_report.txt"
    pub output_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyPath {
                field: "input_path".to_string(),
            });
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyPath {
                field: "output_path".to_string(),
            });
        }

        if self.output_path.file_name().is_none() {
            return Err(ConfigValidationError::NotAFile(self.output_path.clone()));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Path for '{field}' must not be empty")]
    EmptyPath { field: String },

    #[error("Output path '{}' does not name a file", .0.display())]
    NotAFile(PathBuf),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl AnalysisConfigBuilder {
    /// Set the CSV file to analyze.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set where the report is written.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let config = AnalysisConfig {
            input_path: self
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        };

        config.validate()?;
        Ok(config)
    }
}
