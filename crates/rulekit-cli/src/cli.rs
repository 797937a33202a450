//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// rulekit - Install rule templates for AI coding tools into a project
#[derive(Parser, Debug)]
#[command(name = "rulekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Templates root containing rulekit.toml and the rule bundles
    #[arg(
        long,
        global = true,
        env = "RULEKIT_TEMPLATES",
        default_value = "templates",
        value_name = "DIR"
    )]
    pub templates: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the tools declared in the templates configuration
    ListTools {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check a selection of tool keys against the registry
    ///
    /// Exits with status 2 when any key is unknown.
    ///
    /// Examples:
    ///   rulekit validate python rust
    ///   rulekit validate --json '["python", "rust"]'
    Validate {
        /// Tool keys to check
        #[arg(required_unless_present = "json")]
        tools: Vec<String>,

        /// Selection given as a JSON value instead of arguments
        #[arg(long, conflicts_with = "tools", value_name = "SELECTION")]
        json: Option<String>,
    },

    /// Install rule documents for the selected tools
    ///
    /// Examples:
    ///   rulekit install python                 # Into ./.cursor/rules/python
    ///   rulekit install python rust -d ../app  # Into another project
    ///   rulekit install python --dry-run       # Show what would be written
    ///   rulekit install python --var language=Python
    Install {
        /// Tool keys to install, in order
        #[arg(required = true)]
        tools: Vec<String>,

        /// Destination project root
        #[arg(short, long, default_value = ".", value_name = "DIR")]
        dest: PathBuf,

        /// Project name used in templates (defaults to the destination directory name)
        #[arg(short, long)]
        project: Option<String>,

        /// Template variable, may be repeated
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        /// Show what would be written without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip unknown tools instead of refusing the selection
        #[arg(long)]
        force: bool,
    },
}

/// Parse a `KEY=VALUE` template variable.
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("variable name is empty in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
