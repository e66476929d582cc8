//! Application constants for the student records processor
//!
//! This module contains file names, schema limits, grade band thresholds
//! and menu codes used throughout the application.

// =============================================================================
// Input and Output Files
// =============================================================================

/// Default input file holding one student record per line
pub const DEFAULT_INPUT_FILE: &str = "STUDENTDATA.TXT";

/// Report output file names, one per report kind
pub mod output_files {
    pub const AVERAGE_ALL: &str = "AVERAGE_GRADE_FOR_ALL_STUDENTS.TXT";
    pub const AVERAGE_BY_PROGRAM: &str = "AVERAGE_GRADES_FOR_PROGRAMS.TXT";
    pub const HIGHEST_GRADE: &str = "STUDENT_WITH_HIGHEST_GRADES.TXT";
    pub const LOWEST_GRADE: &str = "STUDENT_WITH_LOWEST_GRADES.TXT";
    pub const STUDENTS_IN_MSIT: &str = "STUDENTS_IN_COURSE_MSIT.TXT";
    pub const STUDENTS_IN_MSCM: &str = "STUDENTS_IN_COURSE_MSCM.TXT";
    pub const SORTED_BY_ID: &str = "SORTED_STUDENTS_BY_ID.TXT";
    pub const BAD_RECORDS: &str = "BADRECORDS.TXT";
}

/// Configuration directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "student-records";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Record Schema
// =============================================================================

/// Field delimiter in the input file
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in every record
pub const RECORD_FIELD_COUNT: usize = 5;

/// Required length of a student id
pub const STUDENT_ID_LENGTH: usize = 4;

/// Name length bounds (inclusive, counted in characters)
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 10;

/// Grade score bounds (inclusive)
pub const MIN_GRADE_SCORE: f64 = 0.0;
pub const MAX_GRADE_SCORE: f64 = 100.0;

// =============================================================================
// Grade Bands
// =============================================================================

/// Lower bounds of the letter grade bands; anything below D is an F
pub mod grade_bands {
    pub const A: f64 = 90.0;
    pub const B: f64 = 80.0;
    pub const C: f64 = 70.0;
    pub const D: f64 = 60.0;
}

/// Label used for the combined average report
pub const COMBINED_COURSE_LABEL: &str = "MSIT and MSCM combined";

// =============================================================================
// Menu
// =============================================================================

/// Lowest valid menu option
pub const MENU_FIRST_OPTION: u8 = 1;

/// Menu option that ends the session
pub const MENU_EXIT_OPTION: u8 = 9;
