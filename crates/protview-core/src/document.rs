//! Structure documents
//!
//! A [`StructureDocument`] is the decoded text of one structure file plus
//! its resolved format. It is immutable once built.

use crate::format::StructureFormat;
use flate2::read::GzDecoder;
use protview_common::{ProtviewError, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Raw structure text with its format tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureDocument {
    text: String,
    format: StructureFormat,
}

impl StructureDocument {
    pub fn new(text: impl Into<String>, format: StructureFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Build a document from uploaded bytes
    ///
    /// Gzip-compressed input is decompressed first. The result must be UTF-8.
    pub fn from_bytes(bytes: &[u8], format: StructureFormat) -> Result<Self> {
        Ok(Self::new(decode_text(bytes)?, format))
    }

    /// Load a document from disk
    ///
    /// The format is `declared` when given, otherwise the file extension
    /// decides, and content sniffing breaks ties for unknown extensions.
    pub fn from_path(path: &Path, declared: Option<StructureFormat>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let text = decode_text(&bytes)?;

        let format = match declared {
            Some(format) => format,
            None => match StructureFormat::from_path(path) {
                StructureFormat::Unsupported => StructureFormat::sniff(&text),
                format => format,
            },
        };

        debug!(
            path = %path.display(),
            %format,
            bytes = bytes.len(),
            "Loaded structure document"
        );

        Ok(Self::new(text, format))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> StructureFormat {
        self.format
    }

    /// First `lines` lines of the text
    pub fn preview(&self, lines: usize) -> Vec<&str> {
        self.text.lines().take(lines).collect()
    }
}

/// Decompress gzip input if needed and decode as UTF-8, dropping a BOM
fn decode_text(bytes: &[u8]) -> Result<String> {
    let raw = if bytes.starts_with(&GZIP_MAGIC) {
        let mut decompressed = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut decompressed)
            .map_err(|e| ProtviewError::decode(format!("invalid gzip stream: {}", e)))?;
        decompressed
    } else {
        bytes.to_vec()
    };

    let text = String::from_utf8(raw)
        .map_err(|e| ProtviewError::decode(format!("structure file is not UTF-8 text: {}", e)))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
