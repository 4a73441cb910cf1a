//! Report generation module.
//!
//! Rendering turns the computed statistics and counts into the fixed text
//! layout; writing persists that text, creating parent directories.
//!
//! # Example
//!
//! ```rust,ignore
//! use health_analysis::reporting::{ReportRenderer, ReportWriter};
//!
//! let report = ReportRenderer::render(&stats, &abnormal, dataset.len());
//! ReportWriter::write(&report, "output/analysis_report.txt")?;
//! ```

mod renderer;
mod writer;

pub use renderer::{REPORT_TITLE, ReportRenderer, SEPARATOR_WIDTH};
pub use writer::ReportWriter;
