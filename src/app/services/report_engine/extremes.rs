//! Highest and lowest grade selection
//!
//! Both selections are stable: among records with equal grades, the one
//! that appears first in the repository wins.

use crate::models::StudentRecord;

/// Record with the highest grade, first one on ties
pub fn highest_grade(records: &[StudentRecord]) -> Option<&StudentRecord> {
    records.iter().fold(None, |best, record| match best {
        Some(current) if record.grade_score() <= current.grade_score() => Some(current),
        _ => Some(record),
    })
}

/// Record with the lowest grade, first one on ties
pub fn lowest_grade(records: &[StudentRecord]) -> Option<&StudentRecord> {
    records.iter().fold(None, |best, record| match best {
        Some(current) if record.grade_score() >= current.grade_score() => Some(current),
        _ => Some(record),
    })
}
