//! Report computations over the student repository
//!
//! This module provides the seven analytical reports plus the invalid
//! record pass-through. Every report is computed from a freshly built
//! [`StudentRepository`] and returned as a [`ReportOutput`] for an
//! output sink to persist.
//!
//! # Architecture
//!
//! - [`kind`] - Report kinds, menu codes and output file names
//! - [`averages`] - Mean grade and letter grade calculation
//! - [`extremes`] - Stable highest/lowest grade selection
//! - [`listings`] - Program filters, sorted listing and invalid lines
//! - [`output`] - Report bodies handed to output sinks
//!
//! # Example Usage
//!
//! ```rust
//! use student_records::app::services::report_engine::{ReportKind, run_report};
//! use student_records::app::services::student_repository::build_repository;
//! use student_records::app::services::validator::Validator;
//!
//! let lines = ["1234,Amy,Lee,95,MSIT", "2001,Ben,Ng,75,MSCM"];
//! let mut repository = build_repository(lines, &Validator::default()).repository;
//!
//! let report = run_report(ReportKind::AverageAll, &mut repository);
//! assert_eq!(
//!     report.body.render(),
//!     "Average grade for degree/course MSIT and MSCM combined is B, and average grade score is 85.0"
//! );
//! ```

pub mod averages;
pub mod extremes;
pub mod kind;
pub mod listings;
pub mod output;

#[cfg(test)]
pub mod tests;

pub use averages::GradeAverage;
pub use kind::ReportKind;
pub use output::{ReportBody, ReportOutput};

use tracing::debug;

use crate::app::services::student_repository::StudentRepository;
use crate::models::{Program, StudentRecord};

/// Message used by the extreme-grade reports when there are no records
pub const NO_RECORDS_MESSAGE: &str = "No student records present in the Input file.";

/// Compute one report
///
/// Only [`ReportKind::SortedById`] changes the repository: it re-orders the
/// records in place.
pub fn run_report(kind: ReportKind, repository: &mut StudentRepository) -> ReportOutput {
    debug!("Running report: {}", kind.title());

    let body = match kind {
        ReportKind::AverageAll => {
            ReportBody::Single(averages::average_for_all(repository.records()).to_string())
        }
        ReportKind::AverageByProgram => ReportBody::Lines(
            averages::average_per_program(repository.records())
                .iter()
                .map(GradeAverage::to_string)
                .collect(),
        ),
        ReportKind::Highest => extreme_body(extremes::highest_grade(repository.records())),
        ReportKind::Lowest => extreme_body(extremes::lowest_grade(repository.records())),
        ReportKind::Msit => program_listing(repository, Program::Msit),
        ReportKind::Mscm => program_listing(repository, Program::Mscm),
        ReportKind::SortedById => {
            repository.sort_by_student_id();
            ReportBody::Lines(listings::serialize_records(repository.records()))
        }
        ReportKind::Invalid => {
            ReportBody::Lines(listings::invalid_line_texts(repository.invalid_lines()))
        }
    };

    ReportOutput::new(kind, body)
}

fn program_listing(repository: &StudentRepository, program: Program) -> ReportBody {
    ReportBody::Lines(listings::serialize_records(
        listings::students_in_program(repository.records(), program),
    ))
}

fn extreme_body(record: Option<&StudentRecord>) -> ReportBody {
    ReportBody::Single(
        record
            .map(StudentRecord::to_csv_line)
            .unwrap_or_else(|| NO_RECORDS_MESSAGE.to_string()),
    )
}
