//! Protview CLI Library
//!
//! Command-line front end for protein structure metadata extraction.
//!
//! # Overview
//!
//! - **Extraction**: print the five metadata fields of PDB/mmCIF files
//!   (`protview extract`)
//! - **Preview**: show the first lines of a structure file (`protview preview`)
//! - **Detection**: report the resolved format and PDB ID (`protview detect`)
//! - **Configuration**: inspect CLI settings (`protview config`)

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Protview - protein structure metadata from PDB and mmCIF files
#[derive(Parser, Debug)]
#[command(name = "protview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the full command reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract title, molecule, keywords, method and organism
    Extract {
        /// Structure files (.pdb, .ent, .cif, .mmcif, optionally .gz)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Declared format (pdb, mmcif); detected from the file when omitted
        #[arg(short, long)]
        format: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show the first lines of a structure file
    Preview {
        /// Structure file
        file: PathBuf,

        /// Number of lines to show (at least 1)
        #[arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        lines: Option<usize>,
    },

    /// Show the resolved format and PDB ID of a structure file
    Detect {
        /// Structure file
        file: PathBuf,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show all configuration
    Show,
}
