//! Field splitting for raw student record lines
//!
//! This module turns one raw text line into its comma-separated fields.
//! It makes no judgement about field contents; a wrong field count is
//! reported as [`MalformedLine`] and handed on to the validator, which
//! classifies the line as invalid.

use crate::constants::{FIELD_DELIMITER, RECORD_FIELD_COUNT};
use crate::models::strip_line_terminator;
use thiserror::Error;

/// Line does not split into exactly five fields
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {RECORD_FIELD_COUNT} comma-separated fields, found {found}")]
pub struct MalformedLine {
    pub found: usize,
}

/// Split a raw line on commas
///
/// A trailing `\n` (or `\r\n`) is removed first, so only the final field is
/// affected. Fields are not trimmed.
pub fn split_fields(line: &str) -> Vec<&str> {
    strip_line_terminator(line).split(FIELD_DELIMITER).collect()
}

/// Split a raw line into exactly five fields
pub fn parse_line(line: &str) -> Result<[&str; RECORD_FIELD_COUNT], MalformedLine> {
    let fields = split_fields(line);
    let found = fields.len();
    fields.try_into().map_err(|_| MalformedLine { found })
}
