//! Tests for highest and lowest grade selection

use super::*;
use crate::app::services::report_engine::extremes::{highest_grade, lowest_grade};

#[test]
fn test_highest_grade_tie_keeps_first_record() {
    let repository = repository_from(MIXED_INPUT);

    // Cara (1500) and Eli (1750) both have 95; Cara comes first
    let highest = highest_grade(repository.records()).unwrap();
    assert_eq!(highest.student_id(), "1500");
    assert_eq!(highest.to_csv_line(), "1500,Cara,Diaz,95,MSIT");
}

#[test]
fn test_lowest_grade_tie_keeps_first_record() {
    let repository = repository_from(&[
        "3000,Al,Bo,70,MSIT",
        "3001,Cy,Do,60,MSCM",
        "3002,Ed,Fa,60,MSIT",
        "3003,Gi,Ho,80,MSCM",
    ]);

    let lowest = lowest_grade(repository.records()).unwrap();
    assert_eq!(lowest.student_id(), "3001");
}

#[test]
fn test_extremes_compare_numerically() {
    // "9" sorts after "100" as text; numerically 100 is highest
    let repository = repository_from(&["3000,Al,Bo,9,MSIT", "3001,Cy,Do,100,MSCM"]);

    assert_eq!(
        highest_grade(repository.records()).unwrap().student_id(),
        "3001"
    );
    assert_eq!(
        lowest_grade(repository.records()).unwrap().student_id(),
        "3000"
    );
}

#[test]
fn test_extremes_of_empty_repository() {
    assert!(highest_grade(&[]).is_none());
    assert!(lowest_grade(&[]).is_none());
}
