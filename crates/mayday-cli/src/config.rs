//! # CLI Configuration
//!
//! Environment-based defaults for the report command. Command-line flags
//! take precedence over everything loaded here.

use std::env;
use std::path::PathBuf;

use clap::ValueEnum;

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    Json,
    #[default]
    #[value(alias = "md")]
    Markdown,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Disaster table read when no path is given
    pub data_path: PathBuf,

    /// Logging level
    pub log_level: String,

    /// Report format
    pub report_format: ReportFormat,

    /// Length of the ground-fatality ranking
    pub ranking_limit: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_path: lookup("MAYDAY_DATA_PATH")
                .map_or_else(|| PathBuf::from("data/disasters.csv"), PathBuf::from),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            report_format: lookup("MAYDAY_REPORT_FORMAT")
                .and_then(|v| ReportFormat::from_str(&v, true).ok())
                .unwrap_or_default(),

            ranking_limit: lookup("MAYDAY_RANKING_LIMIT").and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
