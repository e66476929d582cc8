//! Report command implementation
//!
//! Generates the requested reports without the interactive menu. The input
//! file is re-read before each report, exactly as in the menu session.

use std::io::Write;
use std::time::Instant;
use tracing::info;

use super::shared::{RunStats, announce_created_file};
use crate::Result;
use crate::app::services::output_sink::{ConsoleSink, FileSink, OutputSink, TeeSink};
use crate::app::services::report_engine::{ReportKind, run_report};
use crate::app::services::student_repository::load_repository;
use crate::app::services::validator::Validator;
use crate::cli::args::ReportArgs;
use crate::config::Config;

/// Report command runner printing to stdout and writing report files
pub async fn run_reports(config: &Config, args: &ReportArgs) -> Result<RunStats> {
    let mut sink = TeeSink::new(
        ConsoleSink::stdout(config.console.color),
        FileSink::new(config.resolved_output_dir()),
    );
    let mut output = std::io::stdout();
    generate_reports(config, &args.selected_kinds(), &mut output, &mut sink).await
}

/// Generate `kinds` in order into `sink`, with notices going to `output`
pub async fn generate_reports<W: Write, S: OutputSink>(
    config: &Config,
    kinds: &[ReportKind],
    output: &mut W,
    sink: &mut S,
) -> Result<RunStats> {
    let start_time = Instant::now();
    let validator = Validator::new(&config.validation);
    let mut stats = RunStats::default();

    for kind in kinds {
        let mut loaded = load_repository(&config.input_path, &validator).await?;
        stats.record_load(loaded.stats.valid_records, loaded.stats.invalid_records);

        let report = run_report(*kind, &mut loaded.repository);
        sink.write_report(&report)?;
        announce_created_file(output, &report)?;
        stats.reports_generated += 1;
    }

    stats.processing_time = start_time.elapsed();
    info!(
        "Generated {} reports in {:.2}s",
        stats.reports_generated,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}
