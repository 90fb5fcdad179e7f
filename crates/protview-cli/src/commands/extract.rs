//! `protview extract` command implementation
//!
//! Extracts the five metadata fields from each file and prints them.

use super::load_document;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::Colorize;
use protview_core::{
    detect_accession, extract, AccessionCode, ProteinMetadata, StructureFormat,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Width of the label column in text output
const LABEL_WIDTH: usize = 26;

/// Extraction result for one file
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub file: String,
    pub format: StructureFormat,
    pub accession: Option<AccessionCode>,
    pub metadata: ProteinMetadata,
}

impl ExtractReport {
    /// Load `path` and extract its metadata
    pub fn from_path(path: &Path, declared: Option<StructureFormat>) -> Result<Self> {
        let document = load_document(path, declared)?;
        let file = path.display().to_string();

        if !document.format().is_supported() {
            warn!(file = %file, "Not a PDB or mmCIF file, skipping metadata extraction");
            eprintln!(
                "{} '{}' is not a PDB or mmCIF file; metadata is not available",
                "warning:".yellow().bold(),
                file
            );
        }

        let metadata = extract(&document);
        let accession = detect_accession(&document);

        info!(
            file = %file,
            format = %document.format(),
            fields = metadata.available_count(),
            "Extracted metadata"
        );

        Ok(Self {
            file,
            format: document.format(),
            accession,
            metadata,
        })
    }
}

/// Run extraction over `files`
pub fn run(files: &[PathBuf], format: Option<&str>, output: Option<OutputFormat>) -> Result<()> {
    let config = Config::load()?;
    let output = output.unwrap_or(config.output);
    let declared = format.map(StructureFormat::from_tag);

    let reports = files
        .iter()
        .map(|file| ExtractReport::from_path(file, declared))
        .collect::<Result<Vec<_>>>()?;

    match output {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    Ok(())
}

/// Labeled text, one block per file
pub fn render_text(reports: &[ExtractReport]) -> String {
    reports
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(report: &ExtractReport) -> String {
    let mut lines = vec![
        report.file.cyan().bold().to_string(),
        format!("{} {}", pad("Format:"), report.format),
    ];

    if let Some(ref accession) = report.accession {
        lines.push(format!("{} {}", pad("PDB ID:"), accession));
    }

    for (field, value) in report.metadata.iter() {
        let label = pad(&format!("{}:", field.label())).bold();
        if value.is_available() {
            lines.push(format!("{} {}", label, value));
        } else {
            lines.push(format!("{} {}", label, value.to_string().dimmed()));
        }
    }

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

/// A JSON object for a single file, an array for several
pub fn render_json(reports: &[ExtractReport]) -> Result<String> {
    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

fn pad(label: &str) -> String {
    format!("{:<width$}", label, width = LABEL_WIDTH)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use protview_core::{extract_str, UNAVAILABLE_LABEL};

    fn report(text: &str, format: StructureFormat) -> ExtractReport {
        ExtractReport {
            file: "input".to_string(),
            format,
            accession: None,
            metadata: extract_str(text, format),
        }
    }

    #[test]
    fn test_render_text_lists_all_fields() {
        colored::control::set_override(false);
        let text = render_text(&[report("EXPDTA    SOLUTION NMR\n", StructureFormat::Pdb)]);

        assert!(text.contains("Format:"));
        assert!(text.contains("Title/Description:"));
        assert!(text.contains("Experimental method:"));
        assert!(text.contains("SOLUTION NMR"));
        assert_eq!(text.matches(UNAVAILABLE_LABEL).count(), 4);
    }

    #[test]
    fn test_render_text_separates_files() {
        colored::control::set_override(false);
        let mut second = report("_exptl.method NMR\n", StructureFormat::Mmcif);
        second.file = "second".to_string();
        let text = render_text(&[report("", StructureFormat::Pdb), second]);

        assert!(text.starts_with("input\n"));
        assert!(text.contains("\n\nsecond\n"));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().filter(|l| l.starts_with("Format:")).count(), 2);
    }

    #[test]
    fn test_render_json_single_and_many() {
        let one = report("_exptl.method NMR\n", StructureFormat::Mmcif);
        let json: serde_json::Value = serde_json::from_str(&render_json(&[one.clone()]).unwrap()).unwrap();
        assert_eq!(json["format"], "mmcif");
        assert_eq!(json["metadata"]["method"], "NMR");
        assert!(json["accession"].is_null());

        let json: serde_json::Value = serde_json::from_str(&render_json(&[one.clone(), one]).unwrap()).unwrap();
        assert_eq!(json.as_array().map(|a| a.len()), Some(2));
    }
}
