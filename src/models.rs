//! Core data structures for student record processing.
//!
//! Defines the degree programs, validated student records, rejected input
//! lines and letter grades used throughout the library.

use crate::constants::grade_bands;
use std::fmt;
use std::str::FromStr;

/// Degree programs a student can be enrolled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Msit,
    Mscm,
}

impl Program {
    /// All programs, in report order
    pub const ALL: [Program; 2] = [Program::Msit, Program::Mscm];

    /// Exact textual code used in the input file
    pub fn code(&self) -> &'static str {
        match self {
            Program::Msit => "MSIT",
            Program::Mscm => "MSCM",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Program {
    type Err = String;

    /// Case-sensitive: only `MSIT` and `MSCM` are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MSIT" => Ok(Program::Msit),
            "MSCM" => Ok(Program::Mscm),
            other => Err(format!("unknown degree program '{}'", other)),
        }
    }
}

/// A validated student record
///
/// Records are only produced by the validator and cannot be modified
/// afterwards. The grade is kept both as a number and as the text it was
/// written as, so serialized records reproduce the input exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    student_id: String,
    first_name: String,
    last_name: String,
    grade_score: f64,
    grade_text: String,
    program: Program,
}

impl StudentRecord {
    pub(crate) fn new(
        student_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        grade_score: f64,
        grade_text: impl Into<String>,
        program: Program,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            grade_score,
            grade_text: grade_text.into(),
            program,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn grade_score(&self) -> f64 {
        self.grade_score
    }

    /// Grade exactly as it appeared in the input file
    pub fn grade_text(&self) -> &str {
        &self.grade_text
    }

    pub fn program(&self) -> Program {
        self.program
    }

    /// Serialize as `student_id,first_name,last_name,grade_score,program`
    pub fn to_csv_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.student_id, self.first_name, self.last_name, self.grade_text, self.program
        )
    }
}

/// A raw input line that failed validation, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine(String);

impl InvalidLine {
    /// Wrap a raw line, dropping any trailing line terminator
    pub fn new(raw: &str) -> Self {
        Self(strip_line_terminator(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letter grade derived from a numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Map a score onto the grade bands: >=90 A, >=80 B, >=70 C, >=60 D, else F
    pub fn from_score(score: f64) -> Self {
        if score >= grade_bands::A {
            LetterGrade::A
        } else if score >= grade_bands::B {
            LetterGrade::B
        } else if score >= grade_bands::C {
            LetterGrade::C
        } else if score >= grade_bands::D {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Remove one trailing `\n` or `\r\n`
pub(crate) fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
