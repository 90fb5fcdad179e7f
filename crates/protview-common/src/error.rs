//! Error types for protview

use thiserror::Error;

/// Result type alias for protview operations
pub type Result<T> = std::result::Result<T, ProtviewError>;

/// Main error type for protview
///
/// Missing metadata is never an error: extraction reports absent fields
/// in-band. These variants cover loading and boundary validation only.
#[derive(Error, Debug)]
pub enum ProtviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid accession code: {0}")]
    InvalidAccession(String),
}

impl ProtviewError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an invalid accession error
    pub fn invalid_accession(msg: impl Into<String>) -> Self {
        Self::InvalidAccession(msg.into())
    }
}
