//! Input file loading
//!
//! Reads the whole input file and builds a fresh repository from it. An
//! unreadable file, or one that yields no valid student records, is an
//! [`Error::InvalidInputFile`] and ends the current run.

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use super::{BuildResult, build_repository};
use crate::app::services::validator::Validator;
use crate::{Error, Result};

/// Read the raw input file contents
pub async fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|e| {
        Error::invalid_input_file(path, format!("Unable to read input file: {}", e))
    })
}

/// Read and validate the input file
pub async fn load_repository(path: &Path, validator: &Validator) -> Result<BuildResult> {
    let content = read_input(path).await?;

    let result = build_repository(content.lines(), validator);

    if result.repository.is_empty() {
        warn!(
            "No valid student records in {} ({} lines read)",
            path.display(),
            result.stats.total_lines
        );
        return Err(Error::no_valid_records(path));
    }

    info!(
        "Loaded {} student records from {} ({} invalid)",
        result.stats.valid_records,
        path.display(),
        result.stats.invalid_records
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_repository_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("STUDENTDATA.TXT");
        std::fs::write(&input, "1234,Amy,Lee,95,MSIT\nbad line\n").unwrap();

        let result = load_repository(&input, &Validator::default())
            .await
            .unwrap();

        assert_eq!(result.repository.records().len(), 1);
        assert_eq!(result.repository.invalid_lines()[0].as_str(), "bad line");
    }

    #[tokio::test]
    async fn test_missing_file_is_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.txt");

        let error = load_repository(&input, &Validator::default())
            .await
            .unwrap_err();
        assert!(matches!(error, Error::InvalidInputFile { .. }));
    }

    #[tokio::test]
    async fn test_no_valid_records_is_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("STUDENTDATA.TXT");
        std::fs::write(&input, "123,Amy,Lee,95,MSIT\n1234,Amy,Lee,95,MSBA\n").unwrap();

        let error = load_repository(&input, &Validator::default())
            .await
            .unwrap_err();
        assert!(matches!(error, Error::InvalidInputFile { .. }));
        assert!(error.to_string().contains("No student records loaded"));

        // Empty file behaves the same way
        std::fs::write(&input, "").unwrap();
        assert!(load_repository(&input, &Validator::default()).await.is_err());
    }
}
