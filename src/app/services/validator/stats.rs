//! Validation statistics for a single read of the input file
//!
//! Tracks how many lines were read, how many became student records, and
//! which lines were rejected and why.

use super::rules::RejectionReason;

/// A rejected line together with its 1-based line number
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub line_number: usize,
    pub line: String,
    pub reason: RejectionReason,
}

/// Simple validation statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationStats {
    /// Total number of lines classified
    pub total_lines: usize,

    /// Number of lines that became student records
    pub valid_records: usize,

    /// Number of lines routed to the invalid set
    pub invalid_records: usize,

    /// Every rejection, in file order
    pub rejections: Vec<Rejection>,
}

impl ValidationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a valid line
    pub fn add_valid(&mut self) {
        self.total_lines += 1;
        self.valid_records += 1;
    }

    /// Record a rejected line
    pub fn add_rejection(&mut self, line: &str, reason: RejectionReason) {
        self.total_lines += 1;
        self.invalid_records += 1;
        self.rejections.push(Rejection {
            line_number: self.total_lines,
            line: line.to_string(),
            reason,
        });
    }

    /// Percentage of lines that were valid
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.valid_records as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Validation Summary: {} lines -> {} valid, {} invalid ({:.1}% valid)",
            self.total_lines,
            self.valid_records,
            self.invalid_records,
            self.success_rate()
        )
    }
}
