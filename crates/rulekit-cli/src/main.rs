//! rulekit CLI
//!
//! The command-line interface for installing rule templates into projects.

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::InstallOptions;
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.templates).await,
        None => {
            // No command provided - show help hint
            println!("{} rule template installer", "rulekit".green().bold());
            println!();
            println!("Run {} for available commands.", "rulekit --help".cyan());
            Ok(0)
        }
    }
}

/// Log to stderr; `--verbose` forces debug, otherwise `RUST_LOG` or `info`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("{} could not install logger: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");
}

async fn execute_command(cmd: Commands, templates: &std::path::Path) -> Result<u8> {
    match cmd {
        Commands::ListTools { json } => {
            commands::run_list_tools(templates, json)?;
            Ok(0)
        }
        Commands::Validate { tools, json } => {
            commands::run_validate(templates, &tools, json.as_deref())
        }
        Commands::Install {
            tools,
            dest,
            project,
            vars,
            dry_run,
            force,
        } => {
            let options = InstallOptions {
                project,
                vars,
                dry_run,
                force,
            };
            commands::run_install(templates, &dest, &tools, &options).await
        }
    }
}
