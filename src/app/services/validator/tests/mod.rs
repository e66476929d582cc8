//! Tests for record validation
//!
//! Shared fixtures for rule-level and line-level validator tests.


use crate::models::StudentRecord;

use super::{LineClassification, Validator};

/// A line that passes every rule
pub const VALID_LINE: &str = "1234,Amy,Lee,95,MSIT";

/// Validate a line expected to pass, panicking with the reason otherwise
pub fn valid_record(line: &str) -> StudentRecord {
    match Validator::default().classify(line) {
        LineClassification::Valid(record) => record,
        LineClassification::Invalid { reason, .. } => {
            panic!("expected '{}' to be valid, rejected: {}", line, reason)
        }
    }
}
