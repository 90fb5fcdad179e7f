//! Build automation tasks for protview
//!
//! Currently generates the CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for protview", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<protview_cli::Cli>();

    let content = format!(
        r#"# protview CLI Reference

Generated from the CLI source for version {}.

## Overview

`protview` reads PDB and mmCIF structure files, optionally gzip-compressed,
and reports five metadata fields: title, molecule name, keywords,
experimental method and source organism. Fields the file does not carry are
reported as "Not available" (or `null` in JSON output).

## Quick Start

```bash
# Labeled text for one file
protview extract 1fat.pdb

# JSON for several files
protview extract --output json 1fat.pdb 4hhb.cif.gz

# Files without a usable extension
protview extract --format mmcif upload.dat

# First 20 lines of a file
protview preview 1fat.pdb
```

## Commands

{}

## Environment Variables

- `PROTVIEW_OUTPUT` - Default output format (`text` or `json`, default `text`)
- `PROTVIEW_PREVIEW_LINES` - Default preview length (default `20`)
- `PROTVIEW_LOG_LEVEL` - Log level (`trace`, `debug`, `info`, `warn`, `error`)
- `PROTVIEW_LOG_OUTPUT` - Log destination (`console`, `file`, `both`)
- `PROTVIEW_LOG_FORMAT` - Log format (`text`, `json`)
- `PROTVIEW_LOG_DIR` - Directory for log files
- `PROTVIEW_LOG_FILTER` - Extra tracing filter directives

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        env!("CARGO_PKG_VERSION"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
