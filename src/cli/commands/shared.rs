//! Shared components for CLI commands
//!
//! This module contains run statistics, logging setup and layered
//! configuration loading used by every command.

use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::services::report_engine::{ReportKind, ReportOutput};
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};

/// Run statistics reported across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of reports generated
    pub reports_generated: usize,
    /// Valid records in the most recent read of the input
    pub records_loaded: usize,
    /// Invalid lines in the most recent read of the input
    pub invalid_records: usize,
    /// Total run time
    pub processing_time: Duration,
}

impl RunStats {
    /// Record one read of the input file
    pub fn record_load(&mut self, records: usize, invalid: usize) {
        self.records_loaded = records;
        self.invalid_records = invalid;
    }
}

/// Tell the user the invalid-records file was written
///
/// Other report kinds print nothing.
pub fn announce_created_file<W: Write>(output: &mut W, report: &ReportOutput) -> Result<()> {
    if report.kind == ReportKind::Invalid {
        writeln!(output, "\n{} has been created.", report.target())
            .map_err(|e| Error::io("Failed to write to console", e))?;
    }
    Ok(())
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("student_records={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    args.validate()?;

    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    if !config.console.color {
        colored::control::set_override(false);
    }

    info!(
        "Input: {}, output directory: {}",
        config.input_path.display(),
        config.resolved_output_dir().display()
    );
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(input_path) = &args.input_path {
        config.input_path = input_path.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = Some(output_dir.clone());
    }
    if args.permissive_grades {
        config.validation.enforce_grade_range = false;
    }
    if args.no_color {
        config.console.color = false;
    }
}
