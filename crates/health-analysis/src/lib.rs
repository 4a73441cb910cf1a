//! Health Sensor Analysis Library
//!
//! Summary statistics and abnormal-value counts over tabular health sensor
//! readings, rendered as a fixed-format text report.
//!
//! # Overview
//!
//! - **Loading**: CSV with a header row, parsed by polars against a fixed
//!   8-column schema into typed [`Reading`] records
//! - **Statistics**: mean heart rate, systolic pressure and glucose
//! - **Abnormality detection**: readings strictly above fixed clinical
//!   thresholds (heart rate > 90, systolic > 130, glucose > 110)
//! - **Reporting**: deterministic text layout, written with parent
//!   directories created as needed
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use health_analysis::{AnalysisConfig, Pipeline};
//!
//! let config = AnalysisConfig::builder()
//!     .input_path("health_data.csv")
//!     .output_path("output/analysis_report.txt")
//!     .build()?;
//!
//! match Pipeline::new(config).run() {
//!     Ok(outcome) => println!("{}", outcome.analysis.report),
//!     Err(e) if e.is_load_error() => eprintln!("{}", e),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! Library users that already hold a [`Dataset`] can skip the file system:
//!
//! ```rust,ignore
//! let analysis = Pipeline::analyze(&dataset);
//! assert_eq!(analysis.total_readings, dataset.len());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use analysis::{AbnormalityDetector, ClinicalThresholds, StatisticsCalculator};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{AnalysisError, LoadError, Result as AnalysisResult};
pub use loader::DataLoader;
pub use pipeline::{Analysis, Pipeline, RunOutcome};
pub use reporting::{ReportRenderer, ReportWriter};
pub use types::{AbnormalCounts, AnalysisSummary, Dataset, Reading, Statistics};
