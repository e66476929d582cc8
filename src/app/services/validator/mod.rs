//! Record validation for student data lines
//!
//! This module applies the record schema to parsed fields and classifies
//! every input line as either a valid [`StudentRecord`] or an
//! [`InvalidLine`].
//!
//! ## Rules
//!
//! Rules run in a fixed order and the first failure decides the rejection
//! reason:
//!
//! 1. Exactly five fields (checked by the record parser)
//! 2. Student id of exactly four ASCII digits
//! 3. First name of 1 to 10 characters
//! 4. Last name of 1 to 10 characters
//! 5. Grade parses as a number (and lies in [0, 100] unless range
//!    enforcement is disabled)
//! 6. Program is exactly `MSIT` or `MSCM`
//!
//! A rejected line is never an error: it is recovered locally and processing
//! continues with the next line.

pub mod rules;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use rules::RejectionReason;
pub use stats::{Rejection, ValidationStats};

use crate::app::services::record_parser::parse_line;
use crate::constants::RECORD_FIELD_COUNT;
use crate::config::ValidationConfig;
use crate::models::{InvalidLine, StudentRecord};

/// Outcome of classifying one raw line
#[derive(Debug, Clone, PartialEq)]
pub enum LineClassification {
    Valid(StudentRecord),
    Invalid {
        line: InvalidLine,
        reason: RejectionReason,
    },
}

/// Schema validator for student record lines
#[derive(Debug, Clone)]
pub struct Validator {
    enforce_grade_range: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl Validator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            enforce_grade_range: config.enforce_grade_range,
        }
    }

    /// Validate the five fields of a record and build a student record
    pub fn validate(
        &self,
        fields: &[&str; RECORD_FIELD_COUNT],
    ) -> Result<StudentRecord, RejectionReason> {
        let [student_id, first_name, last_name, grade, program] = *fields;

        rules::check_student_id(student_id)?;
        rules::check_first_name(first_name)?;
        rules::check_last_name(last_name)?;
        let grade_score = rules::parse_grade(grade, self.enforce_grade_range)?;
        let program = rules::parse_program(program)?;

        Ok(StudentRecord::new(
            student_id,
            first_name,
            last_name,
            grade_score,
            grade,
            program,
        ))
    }

    /// Split a raw line into fields and validate them
    ///
    /// A wrong field count becomes [`RejectionReason::WrongFieldCount`].
    pub fn check_line(&self, raw_line: &str) -> Result<StudentRecord, RejectionReason> {
        let fields = parse_line(raw_line)?;
        self.validate(&fields)
    }

    /// Route a raw line to the valid or invalid set
    pub fn classify(&self, raw_line: &str) -> LineClassification {
        match self.check_line(raw_line) {
            Ok(record) => LineClassification::Valid(record),
            Err(reason) => LineClassification::Invalid {
                line: InvalidLine::new(raw_line),
                reason,
            },
        }
    }
}
