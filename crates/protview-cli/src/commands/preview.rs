//! `protview preview` command implementation
//!
//! Prints the first lines of a structure file.

use super::load_document;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Show the first `lines` lines of `file`
pub fn run(file: &Path, lines: Option<usize>) -> Result<()> {
    let config = Config::load()?;
    // clap and Config::validate both reject zero
    let lines = lines.unwrap_or(config.preview_lines);

    let document = load_document(file, None)?;
    for line in document.preview(lines) {
        println!("{}", line);
    }

    Ok(())
}
