//! Interactive session command
//!
//! Runs the menu loop: read a choice, re-read and validate the input file,
//! compute the chosen report and hand it to the output sink. The input is
//! read afresh for every report so each one reflects the current file.

use colored::*;
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, info};

use super::shared::{RunStats, announce_created_file};
use crate::app::services::output_sink::{ConsoleSink, FileSink, OutputSink, TeeSink};
use crate::app::services::report_engine::run_report;
use crate::app::services::student_repository::load_repository;
use crate::app::services::validator::Validator;
use crate::cli::menu::{MenuAction, prompt_menu_action};
use crate::config::Config;
use crate::{Error, Result};

/// Run the interactive menu on stdin/stdout
pub async fn run_menu(config: &Config) -> Result<RunStats> {
    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    let mut sink = TeeSink::new(
        ConsoleSink::stdout(config.console.color),
        FileSink::new(config.resolved_output_dir()),
    );

    run_session(config, &mut input, &mut output, &mut sink).await
}

/// Menu loop over arbitrary input, output and sink
///
/// An unreadable input file, or one with no valid records, ends the session
/// with [`Error::InvalidInputFile`].
pub async fn run_session<R, W, S>(
    config: &Config,
    input: &mut R,
    output: &mut W,
    sink: &mut S,
) -> Result<RunStats>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: OutputSink,
{
    let start_time = Instant::now();
    let validator = Validator::new(&config.validation);
    let mut stats = RunStats::default();
    let write_error = |e| Error::io("Failed to write to console", e);

    info!("Starting interactive session on {}", config.input_path.display());

    loop {
        let kind = match prompt_menu_action(input, output, config.console.color).await? {
            MenuAction::Exit => break,
            MenuAction::Report(kind) => kind,
        };

        debug!("Selected report {:?}", kind);

        // Rebuild from the current file contents for every report
        let mut loaded = load_repository(&config.input_path, &validator).await?;
        stats.record_load(
            loaded.stats.valid_records,
            loaded.stats.invalid_records,
        );

        let report = run_report(kind, &mut loaded.repository);
        sink.write_report(&report)?;
        stats.reports_generated += 1;

        announce_created_file(output, &report)?;
        writeln!(output).map_err(write_error)?;
    }

    let farewell = "Exiting the program.";
    if config.console.color {
        writeln!(output, "{}", farewell.bright_yellow()).map_err(write_error)?;
    } else {
        writeln!(output, "{}", farewell).map_err(write_error)?;
    }

    stats.processing_time = start_time.elapsed();
    info!(
        "Session ended after {} reports in {:.2}s",
        stats.reports_generated,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INPUT: &str = "2001,Zoe,Hart,88,MSCM\n\
                         1002,Ben,Ng,72,MSIT\n\
                         12,Bad,Id,50,MSIT\n";

    fn setup(content: &str) -> (TempDir, Config) {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("STUDENTDATA.TXT");
        std::fs::write(&input_path, content).unwrap();
        let config = Config::default()
            .with_input_path(input_path)
            .without_color();
        (temp_dir, config)
    }

    #[tokio::test]
    async fn test_session_runs_reports_until_exit() {
        let (temp_dir, config) = setup(INPUT);
        let mut input: &[u8] = b"7\n8\n9\n";
        let mut output = Vec::new();
        let mut sink = FileSink::new(temp_dir.path());

        let stats = run_session(&config, &mut input, &mut output, &mut sink)
            .await
            .unwrap();

        assert_eq!(stats.reports_generated, 2);
        assert_eq!(stats.records_loaded, 2);
        assert_eq!(stats.invalid_records, 1);

        let sorted =
            std::fs::read_to_string(temp_dir.path().join("SORTED_STUDENTS_BY_ID.TXT")).unwrap();
        assert_eq!(sorted, "1002,Ben,Ng,72,MSIT\n2001,Zoe,Hart,88,MSCM\n");

        let bad = std::fs::read_to_string(temp_dir.path().join("BADRECORDS.TXT")).unwrap();
        assert_eq!(bad, "12,Bad,Id,50,MSIT\n");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("BADRECORDS.TXT has been created."));
        assert!(printed.ends_with("Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_session_rereads_file_for_each_report() {
        let (temp_dir, config) = setup(INPUT);
        let mut sink = FileSink::new(temp_dir.path());

        let mut input: &[u8] = b"5\n9\n";
        run_session(&config, &mut input, &mut Vec::new(), &mut sink)
            .await
            .unwrap();
        let first =
            std::fs::read_to_string(temp_dir.path().join("STUDENTS_IN_COURSE_MSIT.TXT")).unwrap();
        assert_eq!(first, "1002,Ben,Ng,72,MSIT\n");

        std::fs::write(&config.input_path, "3000,New,One,90,MSIT\n").unwrap();

        let mut input: &[u8] = b"5\n9\n";
        run_session(&config, &mut input, &mut Vec::new(), &mut sink)
            .await
            .unwrap();
        let second =
            std::fs::read_to_string(temp_dir.path().join("STUDENTS_IN_COURSE_MSIT.TXT")).unwrap();
        assert_eq!(second, "3000,New,One,90,MSIT\n");
    }

    #[tokio::test]
    async fn test_session_stops_on_input_without_valid_records() {
        let (temp_dir, config) = setup("12,Bad,Id,50,MSIT\n");
        let mut input: &[u8] = b"1\n9\n";
        let mut sink = FileSink::new(temp_dir.path());

        let error = run_session(&config, &mut input, &mut Vec::new(), &mut sink)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::InvalidInputFile { .. }));
        assert!(
            !temp_dir
                .path()
                .join("AVERAGE_GRADE_FOR_ALL_STUDENTS.TXT")
                .exists()
        );
    }

    #[tokio::test]
    async fn test_invalid_menu_input_does_not_end_session() {
        let (temp_dir, config) = setup(INPUT);
        let mut input: &[u8] = b"x\n0\n1\n9\n";
        let mut output = Vec::new();
        let mut sink = FileSink::new(temp_dir.path());

        let stats = run_session(&config, &mut input, &mut output, &mut sink)
            .await
            .unwrap();

        assert_eq!(stats.reports_generated, 1);
        let average =
            std::fs::read_to_string(temp_dir.path().join("AVERAGE_GRADE_FOR_ALL_STUDENTS.TXT"))
                .unwrap();
        assert_eq!(
            average,
            "Average grade for degree/course MSIT and MSCM combined is B, and average grade score is 80.0"
        );
    }
}
