//! Configuration management for protview CLI
//!
//! Settings come from `PROTVIEW_*` environment variables, with a `.env`
//! file in the working directory honored. Command-line flags override them.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default number of lines shown by `protview preview`.
pub const DEFAULT_PREVIEW_LINES: usize = 20;

/// Environment variable selecting the default output format.
pub const OUTPUT_ENV: &str = "PROTVIEW_OUTPUT";

/// Environment variable selecting the default preview length.
pub const PREVIEW_LINES_ENV: &str = "PROTVIEW_PREVIEW_LINES";

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled, human-readable text
    #[default]
    Text,
    /// JSON on stdout
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::config(format!(
                "{} must be 'text' or 'json', got '{}'",
                OUTPUT_ENV, s
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    pub output: OutputFormat,

    /// Default preview length in lines
    pub preview_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            preview_lines: DEFAULT_PREVIEW_LINES,
        }
    }
}

impl Config {
    /// Load config from `.env` and environment variables
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load config from environment variables only
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(output) = std::env::var(OUTPUT_ENV) {
            config.output = output.parse()?;
        }

        if let Ok(lines) = std::env::var(PREVIEW_LINES_ENV) {
            config.preview_lines = lines.trim().parse().map_err(|_| {
                CliError::config(format!(
                    "{} must be a positive integer, got '{}'",
                    PREVIEW_LINES_ENV, lines
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.preview_lines == 0 {
            return Err(CliError::config(format!(
                "{} must be greater than 0",
                PREVIEW_LINES_ENV
            )));
        }
        Ok(())
    }
}
