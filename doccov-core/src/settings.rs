//! Coverage policy and export settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DocCovError;

/// Global coverage threshold used when a check is requested without a value.
pub const DEFAULT_COVERAGE_THRESHOLD: u8 = 70;
/// Minimum coverage per entity used when none is configured.
pub const DEFAULT_COVERAGE_MINIMUM_PER_FILE: u8 = 0;
/// Directory that receives generated documentation.
pub const DEFAULT_OUTPUT: &str = "./documentation/";

/// Format the documentation is exported as.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// HTML pages plus a coverage badge.
    #[default]
    Html,
    /// JSON dump only.
    Json,
}

impl FromStr for ExportFormat {
    type Err = DocCovError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(DocCovError::Other(format!(
                "unsupported export format '{other}', expected html or json"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Settings controlling pass/fail checks and where reports go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageSettings {
    /// Check the project-wide coverage against `coverage_test_threshold`.
    pub coverage_test: bool,
    /// Check every entity against `coverage_minimum_per_file`.
    pub coverage_test_per_file: bool,
    /// Minimum project-wide coverage.
    pub coverage_test_threshold: u8,
    /// Minimum coverage of each entity.
    pub coverage_minimum_per_file: u8,
    /// Whether a failed check should make the process exit with a failure code.
    pub coverage_test_threshold_fail: bool,
    /// Export format; the badge is only rendered for HTML.
    pub export_format: ExportFormat,
    /// Output directory.
    pub output: PathBuf,
}

impl Default for CoverageSettings {
    fn default() -> Self {
        Self {
            coverage_test: false,
            coverage_test_per_file: false,
            coverage_test_threshold: DEFAULT_COVERAGE_THRESHOLD,
            coverage_minimum_per_file: DEFAULT_COVERAGE_MINIMUM_PER_FILE,
            coverage_test_threshold_fail: true,
            export_format: ExportFormat::Html,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = CoverageSettings::default();
        assert!(!settings.coverage_test);
        assert!(!settings.coverage_test_per_file);
        assert_eq!(settings.coverage_test_threshold, 70);
        assert_eq!(settings.coverage_minimum_per_file, 0);
        assert!(settings.coverage_test_threshold_fail);
        assert_eq!(settings.export_format, ExportFormat::Html);
        assert_eq!(settings.output, PathBuf::from("./documentation/"));
    }

    #[test]
    fn parses_export_formats() {
        assert_eq!("HTML".parse::<ExportFormat>().expect("html"), ExportFormat::Html);
        assert_eq!(" json ".parse::<ExportFormat>().expect("json"), ExportFormat::Json);
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
