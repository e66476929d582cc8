//! Output sinks for computed reports
//!
//! A sink receives a finished [`ReportOutput`] and persists or displays it.
//! Reports go to the console and to a file named after the report kind;
//! [`TeeSink`] combines the two.

use colored::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::services::report_engine::ReportOutput;
use crate::{Error, Result};

/// Destination for computed reports
pub trait OutputSink {
    /// Persist or display one report, replacing any earlier content for its target
    fn write_report(&mut self, output: &ReportOutput) -> Result<()>;
}

/// Writes each report to `<output_dir>/<report file name>`, overwriting it
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path a report is written to
    pub fn path_for(&self, output: &ReportOutput) -> PathBuf {
        self.output_dir.join(output.target())
    }
}

impl OutputSink for FileSink {
    fn write_report(&mut self, output: &ReportOutput) -> Result<()> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir)
                .map_err(|e| Error::output(&self.output_dir, e))?;
        }

        let path = self.path_for(output);
        let content = output.body.render();
        std::fs::write(&path, &content).map_err(|e| Error::output(&path, e))?;

        info!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}

/// Prints a heading and every report line to a writer (stdout by default)
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
    color: bool,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_report(&mut self, output: &ReportOutput) -> Result<()> {
        let heading = output.kind.title();
        let write_error = |e| Error::io("Failed to write report to console", e);

        if self.color {
            writeln!(self.writer, "{}", heading.bright_cyan().bold()).map_err(write_error)?;
        } else {
            writeln!(self.writer, "{}", heading).map_err(write_error)?;
        }

        for line in output.body.lines() {
            writeln!(self.writer, "{}", line).map_err(write_error)?;
        }
        self.writer.flush().map_err(write_error)?;

        debug!("Displayed report {:?}", output.kind);
        Ok(())
    }
}

/// Sends each report to two sinks, first then second
#[derive(Debug)]
pub struct TeeSink<A, B> {
    first: A,
    second: B,
}

impl<A: OutputSink, B: OutputSink> TeeSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: OutputSink, B: OutputSink> OutputSink for TeeSink<A, B> {
    fn write_report(&mut self, output: &ReportOutput) -> Result<()> {
        self.first.write_report(output)?;
        self.second.write_report(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::report_engine::{ReportBody, ReportKind};
    use tempfile::TempDir;

    fn listing(lines: &[&str]) -> ReportOutput {
        ReportOutput::new(
            ReportKind::Msit,
            ReportBody::Lines(lines.iter().map(|l| l.to_string()).collect()),
        )
    }

    #[test]
    fn test_file_sink_writes_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        let output = listing(&["1002,Ben,Ng,72.5,MSIT", "1500,Cara,Diaz,95,MSIT"]);
        sink.write_report(&output).unwrap();

        let path = temp_dir.path().join("STUDENTS_IN_COURSE_MSIT.TXT");
        assert_eq!(sink.path_for(&output), path);
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "1002,Ben,Ng,72.5,MSIT\n1500,Cara,Diaz,95,MSIT\n"
        );
    }

    #[test]
    fn test_file_sink_overwrites_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        sink.write_report(&listing(&["a", "b", "c"])).unwrap();
        sink.write_report(&listing(&["d"])).unwrap();

        let content =
            std::fs::read_to_string(temp_dir.path().join("STUDENTS_IN_COURSE_MSIT.TXT")).unwrap();
        assert_eq!(content, "d\n");
    }

    #[test]
    fn test_file_sink_single_body_has_no_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(temp_dir.path().join("reports"));

        let output = ReportOutput::new(
            ReportKind::Highest,
            ReportBody::Single("1500,Cara,Diaz,95,MSIT".to_string()),
        );
        sink.write_report(&output).unwrap();

        let content = std::fs::read_to_string(
            temp_dir
                .path()
                .join("reports")
                .join("STUDENT_WITH_HIGHEST_GRADES.TXT"),
        )
        .unwrap();
        assert_eq!(content, "1500,Cara,Diaz,95,MSIT");
    }

    #[test]
    fn test_console_sink_prints_heading_and_lines() {
        let mut sink = ConsoleSink::new(Vec::new(), false);
        sink.write_report(&listing(&["x", "y"])).unwrap();

        let printed = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(printed, "Display students in MSIT\nx\ny\n");
    }

    #[test]
    fn test_tee_sink_writes_to_both() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = TeeSink::new(
            ConsoleSink::new(Vec::new(), false),
            FileSink::new(temp_dir.path()),
        );

        sink.write_report(&listing(&["x"])).unwrap();

        let (console, files) = sink.into_parts();
        assert!(
            String::from_utf8(console.into_inner())
                .unwrap()
                .ends_with("x\n")
        );
        assert!(files.output_dir().join("STUDENTS_IN_COURSE_MSIT.TXT").exists());
    }
}
