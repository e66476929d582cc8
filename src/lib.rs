//! Student Records Library
//!
//! Validates student academic records read from a comma-delimited text file
//! and produces grade reports from the valid ones.
//!
//! This library provides tools for:
//! - Classifying every input line as a valid [`StudentRecord`] or an invalid line
//! - Computing averages, highest and lowest grades, program listings and sorted listings
//! - Writing each report to the console and to its own output file
//! - Driving the reports from an interactive menu or the command line

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Core application modules
pub mod app {
    pub mod services {
        pub mod output_sink;
        pub mod record_parser;
        pub mod report_engine;
        pub mod student_repository;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod menu;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use models::{InvalidLine, LetterGrade, Program, StudentRecord};
