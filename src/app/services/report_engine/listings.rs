//! Record listings: program filters, sorted order and invalid lines

use crate::models::{InvalidLine, Program, StudentRecord};

/// Records enrolled in `program`, in repository order
pub fn students_in_program(records: &[StudentRecord], program: Program) -> Vec<&StudentRecord> {
    records.iter().filter(|r| r.program() == program).collect()
}

/// Serialize records, one line each
pub fn serialize_records<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    records.into_iter().map(StudentRecord::to_csv_line).collect()
}

/// Invalid lines exactly as read
pub fn invalid_line_texts(lines: &[InvalidLine]) -> Vec<String> {
    lines.iter().map(|l| l.as_str().to_string()).collect()
}
