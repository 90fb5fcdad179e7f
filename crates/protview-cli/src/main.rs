//! Protview CLI - Main entry point

use clap::Parser;
use protview_cli::{Cli, Commands, ConfigCommand};
use protview_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    let Some(ref command) = cli.command else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    // Verbose mode logs extraction decisions; normal mode only warnings
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };

    let log_config = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("protview-cli")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging, so initialization errors are ignored
    let _guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(command) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
fn execute_command(command: &Commands) -> protview_cli::Result<()> {
    match command {
        Commands::Extract {
            files,
            format,
            output,
        } => protview_cli::commands::extract::run(files, format.as_deref(), *output),

        Commands::Preview { file, lines } => protview_cli::commands::preview::run(file, *lines),

        Commands::Detect { file } => protview_cli::commands::detect::run(file),

        Commands::Config { command } => match command {
            ConfigCommand::Get { key } => protview_cli::commands::config::get(key),
            ConfigCommand::Show => protview_cli::commands::config::show(),
        },
    }
}
