//! Configuration management and validation.
//!
//! Provides the configuration structures for input/output locations,
//! validation rules and console presentation. Configuration is layered:
//! defaults, then an optional TOML file, then command-line overrides.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_FILE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for student record processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input file with one student record per line
    pub input_path: PathBuf,

    /// Directory for report files (defaults to the input file's directory)
    pub output_dir: Option<PathBuf>,

    /// Record validation settings
    pub validation: ValidationConfig,

    /// Console presentation settings
    pub console: ConsoleConfig,
}

/// Record validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reject grade scores outside [0, 100]
    ///
    /// When disabled, any parseable number is accepted as a grade.
    pub enforce_grade_range: bool,
}

/// Console presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Colour headings and menu text
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: None,
            validation: ValidationConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_grade_range: true,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Default configuration file location, e.g. `~/.config/student-records/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parsing(origin, e))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&content, path)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `config_file` if given, else from the default
    /// location if it exists, else fall back to defaults
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Set the input file
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Set the report output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Accept any parseable grade, without the [0, 100] range check
    pub fn with_permissive_grades(mut self) -> Self {
        self.validation.enforce_grade_range = false;
        self
    }

    /// Disable coloured console output
    pub fn without_color(mut self) -> Self {
        self.console.color = false;
        self
    }

    /// Directory report files are written to
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .input_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path must not be empty"));
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("STUDENTDATA.TXT"));
        assert!(config.validation.enforce_grade_range);
        assert!(config.console.color);
        assert_eq!(config.resolved_output_dir(), PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_dir_defaults_to_input_directory() {
        let config = Config::default().with_input_path("/data/records/STUDENTDATA.TXT");
        assert_eq!(config.resolved_output_dir(), PathBuf::from("/data/records"));

        let config = config.with_output_dir("/tmp/reports");
        assert_eq!(config.resolved_output_dir(), PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            "input_path = \"records.txt\"\n[validation]\nenforce_grade_range = false\n",
            Path::new("inline.toml"),
        )
        .unwrap();

        assert_eq!(config.input_path, PathBuf::from("records.txt"));
        assert!(!config.validation.enforce_grade_range);
        assert!(config.console.color);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let result = Config::from_toml_str("colour = true\n", Path::new("inline.toml"));
        assert!(matches!(result, Err(Error::ConfigParsing { .. })));
    }

    #[test]
    fn test_load_layered_with_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[console]\ncolor = false\n").unwrap();

        let config = Config::load_layered(Some(&config_path)).unwrap();
        assert!(!config.console.color);

        let missing = temp_dir.path().join("missing.toml");
        assert!(Config::load_layered(Some(&missing)).is_err());
    }

    #[test]
    fn test_validate_rejects_file_as_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        std::fs::write(&file_path, "x").unwrap();

        let config = Config::default().with_output_dir(&file_path);
        assert!(config.validate().is_err());

        let config = Config::default().with_input_path("");
        assert!(config.validate().is_err());
    }
}
