//! Report kinds and their fixed properties
//!
//! Each report kind has a menu action code, a console title and the name
//! of the file it is written to.

use clap::ValueEnum;
use std::fmt;

use crate::constants::output_files;

/// The eight reports available from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportKind {
    /// Average grade for all students
    AverageAll,
    /// Average grade for each program
    AverageByProgram,
    /// Record with the highest grade
    Highest,
    /// Record with the lowest grade
    Lowest,
    /// Students enrolled in MSIT
    Msit,
    /// Students enrolled in MSCM
    Mscm,
    /// All students sorted by student id
    SortedById,
    /// Lines that failed validation
    Invalid,
}

impl ReportKind {
    /// All report kinds, in menu order
    pub const ALL: [ReportKind; 8] = [
        ReportKind::AverageAll,
        ReportKind::AverageByProgram,
        ReportKind::Highest,
        ReportKind::Lowest,
        ReportKind::Msit,
        ReportKind::Mscm,
        ReportKind::SortedById,
        ReportKind::Invalid,
    ];

    /// Look up a report by its menu action code (1-8)
    pub fn from_action(code: u8) -> Option<Self> {
        match code {
            1..=8 => Some(Self::ALL[usize::from(code) - 1]),
            _ => None,
        }
    }

    /// Menu action code (1-8)
    pub fn action_code(&self) -> u8 {
        match self {
            ReportKind::AverageAll => 1,
            ReportKind::AverageByProgram => 2,
            ReportKind::Highest => 3,
            ReportKind::Lowest => 4,
            ReportKind::Msit => 5,
            ReportKind::Mscm => 6,
            ReportKind::SortedById => 7,
            ReportKind::Invalid => 8,
        }
    }

    /// Menu text and console heading
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::AverageAll => "Display average grade for all students",
            ReportKind::AverageByProgram => "Display average grade for each program",
            ReportKind::Highest => "Display highest grade record",
            ReportKind::Lowest => "Display lowest grade record",
            ReportKind::Msit => "Display students in MSIT",
            ReportKind::Mscm => "Display students in MSCM",
            ReportKind::SortedById => "Display all students in sorted order by student ID",
            ReportKind::Invalid => "Display invalid records",
        }
    }

    /// File the report is written to
    pub fn output_file_name(&self) -> &'static str {
        match self {
            ReportKind::AverageAll => output_files::AVERAGE_ALL,
            ReportKind::AverageByProgram => output_files::AVERAGE_BY_PROGRAM,
            ReportKind::Highest => output_files::HIGHEST_GRADE,
            ReportKind::Lowest => output_files::LOWEST_GRADE,
            ReportKind::Msit => output_files::STUDENTS_IN_MSIT,
            ReportKind::Mscm => output_files::STUDENTS_IN_MSCM,
            ReportKind::SortedById => output_files::SORTED_BY_ID,
            ReportKind::Invalid => output_files::BAD_RECORDS,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.action_code(), self.title())
    }
}
