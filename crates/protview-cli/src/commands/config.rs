//! `protview config` command implementation
//!
//! Shows the effective CLI configuration.

use crate::config::{Config, OUTPUT_ENV, PREVIEW_LINES_ENV};
use crate::error::{CliError, Result};
use colored::Colorize;

/// Get configuration value
pub fn get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", value_of(&config, key)?);
    Ok(())
}

/// Show all configuration
pub fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Protview CLI Configuration:".cyan().bold());
    println!();
    println!("{:<15} {}", "output:", config.output);
    println!("{:<15} {}", "preview_lines:", config.preview_lines);
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  {:<24} - Default output format (text, json)", OUTPUT_ENV);
    println!("  {:<24} - Default preview length", PREVIEW_LINES_ENV);
    println!("  {:<24} - Log level (trace, debug, info, warn, error)", "PROTVIEW_LOG_LEVEL");

    Ok(())
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "output" => Ok(config.output.to_string()),
        "preview_lines" => Ok(config.preview_lines.to_string()),
        _ => Err(CliError::config(format!("Unknown config key: {}", key))),
    }
}
