//! Field-level validation rules for student records
//!
//! Each rule checks one field and either passes it through (parsed where
//! relevant) or returns the [`RejectionReason`] that names the failure.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::app::services::record_parser::MalformedLine;
use crate::constants::{
    MAX_GRADE_SCORE, MAX_NAME_LENGTH, MIN_GRADE_SCORE, MIN_NAME_LENGTH,
    STUDENT_ID_LENGTH,
};
use crate::models::Program;

/// Exactly four ASCII digits
static STUDENT_ID_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!("^[0-9]{{{}}}$", STUDENT_ID_LENGTH)).ok());

/// Why a record line was rejected
///
/// Reasons are informational: every variant leads to the same outcome,
/// the raw line being routed to the invalid set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectionReason {
    #[error(
        "Record should have five fields (StudentId, FirstName, LastName, Grade, Degree): {0}"
    )]
    WrongFieldCount(#[from] MalformedLine),

    #[error("StudentId should be a 4 digit number, got '{value}'")]
    InvalidStudentId { value: String },

    #[error("First Name is missing OR has more than 10 chars, got '{value}'")]
    InvalidFirstName { value: String },

    #[error("Last Name is missing OR has more than 10 chars, got '{value}'")]
    InvalidLastName { value: String },

    #[error("Grade should be a number, got '{value}'")]
    UnparseableGrade { value: String },

    #[error("Grade should be between 0 and 100, got '{value}'")]
    GradeOutOfRange { value: String },

    #[error("Degree program should be one of MSIT or MSCM, got '{value}'")]
    InvalidProgram { value: String },
}

impl RejectionReason {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            RejectionReason::WrongFieldCount(_) => "record",
            RejectionReason::InvalidStudentId { .. } => "student_id",
            RejectionReason::InvalidFirstName { .. } => "first_name",
            RejectionReason::InvalidLastName { .. } => "last_name",
            RejectionReason::UnparseableGrade { .. } | RejectionReason::GradeOutOfRange { .. } => {
                "grade_score"
            }
            RejectionReason::InvalidProgram { .. } => "program",
        }
    }
}

/// Rule 2: the student id is four characters long and all digits
pub fn check_student_id(value: &str) -> Result<(), RejectionReason> {
    let matches = match STUDENT_ID_PATTERN.as_ref() {
        Some(pattern) => pattern.is_match(value),
        None => value.len() == STUDENT_ID_LENGTH && value.bytes().all(|b| b.is_ascii_digit()),
    };

    if matches {
        Ok(())
    } else {
        Err(RejectionReason::InvalidStudentId {
            value: value.to_string(),
        })
    }
}

fn name_length_ok(value: &str) -> bool {
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&value.chars().count())
}

/// Rule 3: first name has 1 to 10 characters
pub fn check_first_name(value: &str) -> Result<(), RejectionReason> {
    if name_length_ok(value) {
        Ok(())
    } else {
        Err(RejectionReason::InvalidFirstName {
            value: value.to_string(),
        })
    }
}

/// Rule 4: last name has 1 to 10 characters
pub fn check_last_name(value: &str) -> Result<(), RejectionReason> {
    if name_length_ok(value) {
        Ok(())
    } else {
        Err(RejectionReason::InvalidLastName {
            value: value.to_string(),
        })
    }
}

/// Rule 5: the grade is a number, and within [0, 100] when `enforce_range` is set
///
/// Surrounding whitespace is tolerated when parsing.
pub fn parse_grade(value: &str, enforce_range: bool) -> Result<f64, RejectionReason> {
    let score: f64 = value
        .trim()
        .parse()
        .map_err(|_| RejectionReason::UnparseableGrade {
            value: value.to_string(),
        })?;

    if enforce_range && !(MIN_GRADE_SCORE..=MAX_GRADE_SCORE).contains(&score) {
        return Err(RejectionReason::GradeOutOfRange {
            value: value.to_string(),
        });
    }

    Ok(score)
}

/// Rule 6: the program is exactly `MSIT` or `MSCM`
pub fn parse_program(value: &str) -> Result<Program, RejectionReason> {
    value
        .parse()
        .map_err(|_| RejectionReason::InvalidProgram {
            value: value.to_string(),
        })
}
