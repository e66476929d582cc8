//! Tests for report dispatch and report bodies

use super::*;
use crate::app::services::report_engine::{
    NO_RECORDS_MESSAGE, ReportBody, ReportKind, run_report,
};

fn lines(body: &ReportBody) -> Vec<String> {
    body.lines().into_iter().map(str::to_string).collect()
}

#[test]
fn test_average_all_report() {
    let mut repository = repository_from(MIXED_INPUT);
    let report = run_report(ReportKind::AverageAll, &mut repository);

    assert_eq!(report.kind, ReportKind::AverageAll);
    assert_eq!(report.target(), "AVERAGE_GRADE_FOR_ALL_STUDENTS.TXT");
    // (88 + 72.5 + 95 + 95 + 54) / 5 = 80.9
    assert_eq!(
        report.body,
        ReportBody::Single(
            "Average grade for degree/course MSIT and MSCM combined is B, and average grade score is 80.9"
                .to_string()
        )
    );
}

#[test]
fn test_average_by_program_report_has_line_per_program() {
    let mut repository = repository_from(MIXED_INPUT);
    let report = run_report(ReportKind::AverageByProgram, &mut repository);

    assert_eq!(
        lines(&report.body),
        vec![
            "Average grade for degree/course MSIT is B, and average grade score is 83.8",
            "Average grade for degree/course MSCM is C, and average grade score is 79.0",
        ]
    );
}

#[test]
fn test_highest_and_lowest_reports() {
    let mut repository = repository_from(MIXED_INPUT);

    let highest = run_report(ReportKind::Highest, &mut repository);
    assert_eq!(
        highest.body,
        ReportBody::Single("1500,Cara,Diaz,95,MSIT".to_string())
    );

    let lowest = run_report(ReportKind::Lowest, &mut repository);
    assert_eq!(
        lowest.body,
        ReportBody::Single("1001,Fay,Gil,54,MSCM".to_string())
    );
}

#[test]
fn test_program_listings_keep_file_order() {
    let mut repository = repository_from(MIXED_INPUT);

    let msit = run_report(ReportKind::Msit, &mut repository);
    assert_eq!(
        lines(&msit.body),
        vec!["1002,Ben,Ng,72.5,MSIT", "1500,Cara,Diaz,95,MSIT"]
    );

    let mscm = run_report(ReportKind::Mscm, &mut repository);
    assert_eq!(
        lines(&mscm.body),
        vec![
            "2001,Zoe,Hart,88,MSCM",
            "1750,Eli,Fox,95,MSCM",
            "1001,Fay,Gil,54,MSCM"
        ]
    );
}

#[test]
fn test_sorted_report_reorders_repository() {
    let mut repository = repository_from(&["2001,Zoe,Hart,88,MSCM", "1002,Ben,Ng,72,MSIT"]);
    let report = run_report(ReportKind::SortedById, &mut repository);

    assert_eq!(
        lines(&report.body),
        vec!["1002,Ben,Ng,72,MSIT", "2001,Zoe,Hart,88,MSCM"]
    );
    assert_eq!(repository.records()[0].student_id(), "1002");
    assert_eq!(repository.records()[1].student_id(), "2001");
}

#[test]
fn test_invalid_report_passes_lines_through() {
    let mut repository = repository_from(MIXED_INPUT);
    let report = run_report(ReportKind::Invalid, &mut repository);

    assert_eq!(report.target(), "BADRECORDS.TXT");
    assert_eq!(
        lines(&report.body),
        vec!["123,Amy,Lee,95,MSIT", "1004,Dee,Poe,61,MSBA"]
    );
}

#[test]
fn test_reports_on_empty_repository() {
    let mut repository = repository_from(&[]);

    let average = run_report(ReportKind::AverageAll, &mut repository);
    assert_eq!(
        average.body.render(),
        "No students present for the degree/course - MSIT and MSCM combined in the Input file."
    );

    let highest = run_report(ReportKind::Highest, &mut repository);
    assert_eq!(highest.body.render(), NO_RECORDS_MESSAGE);

    let sorted = run_report(ReportKind::SortedById, &mut repository);
    assert_eq!(sorted.body, ReportBody::Lines(Vec::new()));
}

/// Running every report twice over fresh repositories yields identical output
#[test]
fn test_reports_are_idempotent() {
    for kind in ReportKind::ALL {
        let first = run_report(kind, &mut repository_from(MIXED_INPUT));
        let second = run_report(kind, &mut repository_from(MIXED_INPUT));
        assert_eq!(first, second, "report {:?} differs between runs", kind);
    }

    // Re-running on the same, already sorted, repository is also stable
    let mut repository = repository_from(MIXED_INPUT);
    let first = run_report(ReportKind::SortedById, &mut repository);
    let second = run_report(ReportKind::SortedById, &mut repository);
    assert_eq!(first, second);
}
