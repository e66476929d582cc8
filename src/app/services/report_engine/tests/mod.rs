//! Tests for report computations
//!
//! Fixtures build repositories through the validator so every record used in
//! a test went through the same path as production input.

mod engine_tests;
mod extremes_tests;

use crate::app::services::student_repository::{StudentRepository, build_repository};
use crate::app::services::validator::Validator;

/// Mixed input: five valid records across both programs and two bad lines
pub const MIXED_INPUT: &[&str] = &[
    "2001,Zoe,Hart,88,MSCM",
    "1002,Ben,Ng,72.5,MSIT",
    "123,Amy,Lee,95,MSIT",
    "1500,Cara,Diaz,95,MSIT",
    "1004,Dee,Poe,61,MSBA",
    "1750,Eli,Fox,95,MSCM",
    "1001,Fay,Gil,54,MSCM",
];

/// Build a repository from raw lines
pub fn repository_from(lines: &[&str]) -> StudentRepository {
    build_repository(lines.iter().copied(), &Validator::default()).repository
}
