//! Command-line argument definitions for the student records processor
//!
//! This module defines the CLI using the clap derive API. Options that
//! locate the input, output and configuration are global so they can be
//! given before or after the subcommand.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::services::report_engine::ReportKind;
use crate::{Error, Result};

/// CLI arguments for the student records processor
///
/// Validates student records from STUDENTDATA.TXT and produces grade
/// reports on the console and in report files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "student_records",
    version,
    about = "Validate student records and generate grade reports",
    long_about = "Reads student academic records (student_id,first_name,last_name,grade_score,program), \
                  separates valid records from invalid lines, and produces averages, extremes, \
                  program listings and sorted listings. Every report is printed and written to \
                  its own output file. Without a subcommand an interactive menu is started."
)]
pub struct Args {
    /// Input file with student records
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        env = "STUDENT_RECORDS_INPUT",
        global = true,
        help = "Input file with student records [default: STUDENTDATA.TXT]"
    )]
    pub input_path: Option<PathBuf>,

    /// Directory report files are written to
    ///
    /// Defaults to the directory containing the input file.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        env = "STUDENT_RECORDS_OUTPUT_DIR",
        global = true,
        help = "Directory for report files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/student-records/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Accept any numeric grade instead of requiring 0-100
    #[arg(
        long = "permissive-grades",
        global = true,
        help = "Accept any numeric grade, without the 0-100 range check"
    )]
    pub permissive_grades: bool,

    /// Disable coloured output
    #[arg(long = "no-color", global = true, help = "Disable coloured output")]
    pub no_color: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress log output except errors"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Interactive report menu (default command)
    Menu,
    /// Generate one or more reports and exit
    Report(ReportArgs),
    /// Check the input file and list rejected lines without writing reports
    Validate,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Reports to generate, in order
    #[arg(
        value_enum,
        value_name = "KIND",
        required_unless_present = "all",
        help = "Reports to generate"
    )]
    pub kinds: Vec<ReportKind>,

    /// Generate every report
    #[arg(long = "all", conflicts_with = "kinds", help = "Generate all eight reports")]
    pub all: bool,
}

impl Args {
    /// Get the command, defaulting to the interactive menu
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }

    /// Validate the arguments for consistency
    ///
    /// A missing config file is reported when the configuration is loaded.
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ReportArgs {
    /// Report kinds to run, expanding `--all`
    pub fn selected_kinds(&self) -> Vec<ReportKind> {
        if self.all {
            ReportKind::ALL.to_vec()
        } else {
            self.kinds.clone()
        }
    }
}
