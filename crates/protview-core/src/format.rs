//! Structure file format resolution
//!
//! The format is resolved once at the boundary, from a declared tag, a file
//! extension or, as a last resort, the file content. Everything downstream
//! dispatches on [`StructureFormat`].

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Record tags that identify legacy fixed-column PDB text
const PDB_RECORD_TAGS: &[&str] = &[
    "HEADER", "OBSLTE", "TITLE", "SPLIT", "CAVEAT", "COMPND", "SOURCE", "KEYWDS", "EXPDTA",
    "NUMMDL", "MDLTYP", "AUTHOR", "REVDAT", "SPRSDE", "JRNL", "REMARK", "DBREF", "SEQADV",
    "SEQRES", "MODRES", "HET", "HETNAM", "HETSYN", "FORMUL", "HELIX", "SHEET", "SSBOND", "LINK",
    "CISPEP", "SITE", "CRYST1", "ORIGX1", "SCALE1", "MTRIX1", "MODEL", "ATOM", "ANISOU", "HETATM",
    "TER", "ENDMDL", "CONECT", "MASTER", "END",
];

/// Number of leading non-blank lines inspected when sniffing content
const SNIFF_LINES: usize = 10;

/// Format of a structure document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureFormat {
    /// Legacy fixed-column PDB records
    Pdb,
    /// Tag/value mmCIF (PDBx) text
    Mmcif,
    /// Anything else; extraction yields no fields
    Unsupported,
}

impl StructureFormat {
    /// Resolve a declared format tag or file extension (case-insensitive)
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pdb" | "ent" => StructureFormat::Pdb,
            "mmcif" | "cif" => StructureFormat::Mmcif,
            _ => StructureFormat::Unsupported,
        }
    }

    /// Resolve from a file path's extension, looking through `.gz`
    pub fn from_path(path: &Path) -> Self {
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            return StructureFormat::Unsupported;
        };

        let name = name.to_ascii_lowercase();
        let stem = name.strip_suffix(".gz").unwrap_or(&name);

        match stem.rsplit_once('.') {
            Some((_, ext)) => Self::from_tag(ext),
            None => StructureFormat::Unsupported,
        }
    }

    /// Guess the format from the first meaningful lines of the text
    pub fn sniff(text: &str) -> Self {
        for line in text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
            .take(SNIFF_LINES)
        {
            if line.starts_with('#') {
                continue;
            }

            if line.starts_with("data_") || line.starts_with('_') || line.starts_with("loop_") {
                return StructureFormat::Mmcif;
            }

            let tag = line.split_whitespace().next().unwrap_or_default();
            if PDB_RECORD_TAGS.contains(&tag) {
                return StructureFormat::Pdb;
            }
        }

        StructureFormat::Unsupported
    }

    /// Lowercase tag used in output and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureFormat::Pdb => "pdb",
            StructureFormat::Mmcif => "mmcif",
            StructureFormat::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, StructureFormat::Unsupported)
    }
}

impl std::fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
