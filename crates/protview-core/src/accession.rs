//! PDB accession codes
//!
//! A PDB ID is four ASCII alphanumeric characters, the first a digit
//! (`1FAT`, `4HHB`). In PDB text it is the last field of the `HEADER`
//! record.

use crate::document::StructureDocument;
use crate::format::StructureFormat;
use crate::pdb;
use protview_common::{ProtviewError, Result};
use serde::Serialize;

/// Length of a classic PDB ID
pub const ACCESSION_LEN: usize = 4;

/// Validated, upper-case structure accession code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccessionCode(String);

impl AccessionCode {
    /// Validate and normalize an accession code
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();

        if code.chars().count() != ACCESSION_LEN {
            return Err(ProtviewError::invalid_accession(format!(
                "'{}' - must be exactly {} characters",
                code, ACCESSION_LEN
            )));
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ProtviewError::invalid_accession(format!(
                "'{}' - must contain only alphanumeric characters",
                code
            )));
        }

        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for AccessionCode {
    type Err = ProtviewError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AccessionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// PDB ID from the document's `HEADER` record, if it carries one
pub fn detect_accession(document: &StructureDocument) -> Option<AccessionCode> {
    if document.format() != StructureFormat::Pdb {
        return None;
    }

    let header = pdb::first_record(document.text(), "HEADER")?;
    let candidate = header.split_whitespace().last()?;

    if !candidate.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    AccessionCode::parse(candidate).ok()
}
