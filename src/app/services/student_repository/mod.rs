//! In-memory repository of validated student records
//!
//! The repository holds the valid records and the invalid line set produced
//! by one read of the input file. It is rebuilt from scratch for every
//! report; nothing is cached between reads.
//!
//! - [`build_repository`] is the pure classification step over raw lines
//! - [`loader`] reads the input file and refuses input with no valid records

pub mod loader;

pub use loader::load_repository;

use tracing::debug;

use crate::app::services::validator::{LineClassification, ValidationStats, Validator};
use crate::models::{InvalidLine, StudentRecord};

/// Valid records and rejected lines from one read of the input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentRepository {
    records: Vec<StudentRecord>,
    invalid_lines: Vec<InvalidLine>,
}

impl StudentRepository {
    /// Valid records, in current repository order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Rejected raw lines, in file order
    pub fn invalid_lines(&self) -> &[InvalidLine] {
        &self.invalid_lines
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stable in-place sort by student id
    ///
    /// Ids are fixed-width digit strings, so string order equals numeric order.
    pub fn sort_by_student_id(&mut self) {
        self.records
            .sort_by(|a, b| a.student_id().cmp(b.student_id()));
    }
}

/// Result of classifying every input line
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub repository: StudentRepository,
    pub stats: ValidationStats,
}

/// Classify every line into a record or an invalid line
///
/// Each line lands in exactly one of the two sets.
pub fn build_repository<'a, I>(lines: I, validator: &Validator) -> BuildResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut repository = StudentRepository::default();
    let mut stats = ValidationStats::new();

    for raw_line in lines {
        match validator.classify(raw_line) {
            LineClassification::Valid(record) => {
                stats.add_valid();
                repository.records.push(record);
            }
            LineClassification::Invalid { line, reason } => {
                debug!("Rejected record '{}': {}", line, reason);
                stats.add_rejection(line.as_str(), reason);
                repository.invalid_lines.push(line);
            }
        }
    }

    debug!("{}", stats.summary());

    BuildResult { repository, stats }
}
