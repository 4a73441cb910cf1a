use crate::analysis::{AbnormalityDetector, StatisticsCalculator};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::loader::DataLoader;
use crate::reporting::{ReportRenderer, ReportWriter};
use crate::types::{AbnormalCounts, AnalysisSummary, Dataset, Statistics};
use chrono::Local;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// The analysis pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use health_analysis::{AnalysisConfig, Pipeline};
///
/// let outcome = Pipeline::new(AnalysisConfig::default()).run()?;
/// println!("Analysis complete. Report written to {}", outcome.output_path.display());
/// ```
pub struct Pipeline {
    config: AnalysisConfig,
}

/// Everything derived from one dataset, before anything touches the disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub statistics: Statistics,
    pub abnormal_counts: AbnormalCounts,
    pub total_readings: usize,
    pub report: String,
}

/// Result of a successful [`Pipeline::run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub analysis: Analysis,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl RunOutcome {
    /// Build the machine-readable summary for this run.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: self.input_path.clone(),
            output_file: self.output_path.clone(),
            total_readings: self.analysis.total_readings,
            statistics: self.analysis.statistics,
            abnormal_counts: self.analysis.abnormal_counts,
        }
    }
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load the input, analyze it and write the report.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Load`] if the input cannot be read or parsed.
    /// No output file is created and nothing is logged here; the caller
    /// prints the diagnostic. Returns [`AnalysisError::Write`] if the report
    /// cannot be persisted.
    pub fn run(&self) -> Result<RunOutcome> {
        let start = Instant::now();
        let input_path = &self.config.input_path;
        let output_path = &self.config.output_path;

        let dataset =
            DataLoader::load(input_path).map_err(|e| AnalysisError::load(input_path, e))?;

        let analysis = Self::analyze(&dataset);

        ReportWriter::write(&analysis.report, output_path)
            .map_err(|e| AnalysisError::write(output_path, e))?;

        debug!("Pipeline finished in {}ms", start.elapsed().as_millis());

        Ok(RunOutcome {
            analysis,
            input_path: input_path.clone(),
            output_path: output_path.clone(),
        })
    }

    /// Compute statistics and abnormal counts and render the report text.
    ///
    /// No I/O happens here.
    pub fn analyze(dataset: &Dataset) -> Analysis {
        let statistics = StatisticsCalculator::calculate(dataset);
        debug!("Statistics: {:?}", statistics);

        let abnormal_counts = AbnormalityDetector::detect(dataset);
        debug!("Abnormal counts: {:?}", abnormal_counts);

        let total_readings = dataset.len();
        let report = ReportRenderer::render(&statistics, &abnormal_counts, total_readings);
        info!("Report rendered for {} readings", total_readings);

        Analysis {
            statistics,
            abnormal_counts,
            total_readings,
            report,
        }
    }
}
