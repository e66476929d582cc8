//! Report output structures
//!
//! A report is either a single formatted string or an ordered list of
//! formatted lines. How and where it is persisted is up to the output sink.

use super::kind::ReportKind;

/// Formatted report content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    /// One string, persisted without a trailing newline
    Single(String),
    /// Ordered lines, each persisted followed by a newline
    Lines(Vec<String>),
}

impl ReportBody {
    /// Lines as shown on the console
    pub fn lines(&self) -> Vec<&str> {
        match self {
            ReportBody::Single(text) => vec![text.as_str()],
            ReportBody::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// File content for this body
    pub fn render(&self) -> String {
        match self {
            ReportBody::Single(text) => text.clone(),
            ReportBody::Lines(lines) => lines.iter().map(|line| format!("{}\n", line)).collect(),
        }
    }
}

/// A computed report ready for an output sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    pub kind: ReportKind,
    pub body: ReportBody,
}

impl ReportOutput {
    pub fn new(kind: ReportKind, body: ReportBody) -> Self {
        Self { kind, body }
    }

    /// Name of the file this report is written to
    pub fn target(&self) -> &'static str {
        self.kind.output_file_name()
    }
}
