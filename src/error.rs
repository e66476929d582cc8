//! Error handling for student record processing.
//!
//! Run-level failures (unreadable or empty input, output write failures,
//! configuration problems) live here. Per-line validation failures are not
//! errors at this level; see [`crate::app::services::validator::RejectionReason`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for student record operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be read, or produced no valid student records
    #[error("Invalid input file '{}': {reason}", path.display())]
    InvalidInputFile { path: PathBuf, reason: String },

    /// Menu selection outside 1-9 or not a number
    #[error("Invalid menu option selected. Valid values are between 1 and 9{hint}")]
    InvalidMenuOption { input: String, hint: String },

    /// Writing a report file failed
    #[error("Failed to write report file '{}'", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file '{}'", path.display())]
    ConfigParsing {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid input file error
    pub fn invalid_input_file(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::InvalidInputFile {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create the error raised when an input file yields zero valid records
    pub fn no_valid_records(path: impl AsRef<Path>) -> Self {
        Self::invalid_input_file(
            path,
            "No student records loaded from the input file. \
             Please provide a valid input file with student records",
        )
    }

    /// Create an invalid menu option error for a number outside 1-9
    pub fn menu_out_of_range(input: impl Into<String>) -> Self {
        Self::InvalidMenuOption {
            input: input.into(),
            hint: String::new(),
        }
    }

    /// Create an invalid menu option error for input that is not a number
    pub fn menu_not_a_number(input: impl Into<String>) -> Self {
        Self::InvalidMenuOption {
            input: input.into(),
            hint: ". Please try again.".to_string(),
        }
    }

    /// Create an output error for a report file
    pub fn output(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parsing error
    pub fn config_parsing(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        Self::ConfigParsing {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
