//! Validate command implementation
//!
//! Reads and validates the input file, then prints a summary and every
//! rejected line with the rule it failed. No report files are written.

use colored::*;
use std::io::Write;
use std::time::Instant;
use tracing::info;

use super::shared::RunStats;
use crate::app::services::student_repository::{BuildResult, build_repository, loader};
use crate::app::services::validator::Validator;
use crate::config::Config;
use crate::{Error, Result};

/// Validate command runner printing to stdout
pub async fn run_validate(config: &Config) -> Result<RunStats> {
    let mut output = std::io::stdout();
    validate_input(config, &mut output).await
}

/// Validate the configured input and print the results to `output`
///
/// Fails with [`Error::InvalidInputFile`] after printing when no line is valid.
pub async fn validate_input<W: Write>(config: &Config, output: &mut W) -> Result<RunStats> {
    let start_time = Instant::now();
    let validator = Validator::new(&config.validation);

    let content = loader::read_input(&config.input_path).await?;
    let result = build_repository(content.lines(), &validator);

    print_validation_report(config, &result, output)
        .map_err(|e| Error::io("Failed to write validation report", e))?;

    if result.repository.is_empty() {
        return Err(Error::no_valid_records(&config.input_path));
    }

    let mut stats = RunStats::default();
    stats.record_load(result.stats.valid_records, result.stats.invalid_records);
    stats.processing_time = start_time.elapsed();

    info!("{}", result.stats.summary());
    Ok(stats)
}

fn print_validation_report<W: Write>(
    config: &Config,
    result: &BuildResult,
    output: &mut W,
) -> std::io::Result<()> {
    let stats = &result.stats;
    let color = config.console.color;

    let heading = format!("Validation of {}", config.input_path.display());
    if color {
        writeln!(output, "{}", heading.bright_green().bold())?;
    } else {
        writeln!(output, "{}", heading)?;
    }

    writeln!(output, "  Lines read:      {}", stats.total_lines)?;
    writeln!(output, "  Valid records:   {}", stats.valid_records)?;
    writeln!(output, "  Invalid records: {}", stats.invalid_records)?;
    writeln!(output, "  Valid rate:      {:.1}%", stats.success_rate())?;

    if !stats.rejections.is_empty() {
        writeln!(output)?;
        writeln!(output, "Rejected lines:")?;
        for rejection in &stats.rejections {
            let location = format!("line {}", rejection.line_number);
            let location = if color {
                location.bright_yellow().to_string()
            } else {
                location
            };
            writeln!(
                output,
                "  {} [{}] {}: {}",
                location,
                rejection.reason.field(),
                rejection.line,
                rejection.reason
            )?;
        }
    }

    output.flush()
}
