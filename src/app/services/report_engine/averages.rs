//! Grade averages and letter grades
//!
//! Averages are rounded to one decimal place before the letter grade is
//! looked up, so the printed average and the letter always agree.

use std::fmt;

use crate::constants::COMBINED_COURSE_LABEL;
use crate::models::{LetterGrade, Program, StudentRecord};

/// Round to one decimal place, halves to even
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Average grade for one group of students
#[derive(Debug, Clone, PartialEq)]
pub struct GradeAverage {
    pub label: String,
    /// `None` when the group has no students
    pub average: Option<f64>,
}

impl GradeAverage {
    /// Average the scores of a labelled group
    pub fn compute(label: impl Into<String>, scores: &[f64]) -> Self {
        let average = if scores.is_empty() {
            None
        } else {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            Some(round_to_tenth(mean))
        };

        Self {
            label: label.into(),
            average,
        }
    }

    /// Letter grade for the rounded average
    pub fn letter_grade(&self) -> Option<LetterGrade> {
        self.average.map(LetterGrade::from_score)
    }
}

impl fmt::Display for GradeAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.average, self.letter_grade()) {
            (Some(average), Some(letter)) => write!(
                f,
                "Average grade for degree/course {} is {}, and average grade score is {:.1}",
                self.label, letter, average
            ),
            _ => write!(
                f,
                "No students present for the degree/course - {} in the Input file.",
                self.label
            ),
        }
    }
}

/// Average over every student regardless of program
pub fn average_for_all(records: &[StudentRecord]) -> GradeAverage {
    let scores: Vec<f64> = records.iter().map(StudentRecord::grade_score).collect();
    GradeAverage::compute(COMBINED_COURSE_LABEL, &scores)
}

/// Average for each program, MSIT first
pub fn average_per_program(records: &[StudentRecord]) -> Vec<GradeAverage> {
    Program::ALL
        .iter()
        .map(|program| {
            let scores: Vec<f64> = records
                .iter()
                .filter(|r| r.program() == *program)
                .map(StudentRecord::grade_score)
                .collect();
            GradeAverage::compute(program.code(), &scores)
        })
        .collect()
}
