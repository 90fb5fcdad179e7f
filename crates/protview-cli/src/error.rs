//! Error types for protview CLI
//!
//! Errors are user-facing: each message says what went wrong and what to try.
//! Missing metadata is not an error and never reaches this type.

use protview_common::ProtviewError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Input file could not be decoded as structure text
    #[error("Cannot read structure file '{file}': {source}. Expected PDB or mmCIF text, optionally gzip-compressed.")]
    Document {
        file: String,
        #[source]
        source: ProtviewError,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your PROTVIEW_* environment variables.")]
    Config(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions.")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a document error for `file`
    pub fn document(file: impl Into<String>, source: ProtviewError) -> Self {
        Self::Document {
            file: file.into(),
            source,
        }
    }
}
