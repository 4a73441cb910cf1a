//! CLI entry point for the health sensor analysis.

use anyhow::Result;
use clap::Parser;
use health_analysis::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use health_analysis::{AnalysisConfig, Pipeline, RunOutcome};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Health sensor data analysis report",
    long_about = "Computes average heart rate, systolic blood pressure and glucose over a \
                  sensor CSV file, counts readings above clinical thresholds, and writes a \
                  text report.\n\n\
                  EXAMPLES:\n  \
                  # Defaults: health_data.csv -> output/analysis_report.txt\n  \
                  health-analysis\n\n  \
                  # Custom locations\n  \
                  health-analysis -i data/ward_b.csv -o reports/ward_b.txt\n\n  \
                  # Machine-readable summary on stdout\n  \
                  health-analysis --json"
)]
struct Args {
    /// Path to the sensor CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: String,

    /// Path of the report file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Print a JSON summary to stdout instead of the confirmation message
    ///
    /// Disables all logging so stdout only carries the JSON document.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = AnalysisConfig::builder()
        .input_path(&args.input)
        .output_path(&args.output)
        .build()?;

    match Pipeline::new(config).run() {
        Ok(outcome) => {
            print_outcome(&outcome, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_load_error() => {
            // Handled failure: diagnostic only, no report file.
            eprintln!("{}", e);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_outcome(outcome: &RunOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary())?);
        return Ok(());
    }

    info!(
        "Processed {} readings from {}",
        outcome.analysis.total_readings,
        outcome.input_path.display()
    );
    println!(
        "Analysis complete. Report written to {}",
        outcome.output_path.display()
    );
    Ok(())
}
