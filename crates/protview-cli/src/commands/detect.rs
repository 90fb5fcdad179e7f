//! `protview detect` command implementation

use super::load_document;
use crate::error::Result;
use protview_core::detect_accession;
use std::path::Path;

/// Print the resolved format and, for PDB files, the PDB ID
pub fn run(file: &Path) -> Result<()> {
    let document = load_document(file, None)?;

    println!("{:<8} {}", "format:", document.format());
    if let Some(accession) = detect_accession(&document) {
        println!("{:<8} {}", "pdb id:", accession);
    }

    Ok(())
}
