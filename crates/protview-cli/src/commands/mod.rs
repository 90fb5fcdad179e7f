//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod config;
pub mod detect;
pub mod extract;
pub mod preview;

use crate::error::{CliError, Result};
use protview_core::{StructureDocument, StructureFormat};
use std::path::Path;

/// Load a structure file, mapping failures to user-facing errors
pub(crate) fn load_document(
    path: &Path,
    declared: Option<StructureFormat>,
) -> Result<StructureDocument> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    StructureDocument::from_path(path, declared)
        .map_err(|e| CliError::document(path.display().to_string(), e))
}
