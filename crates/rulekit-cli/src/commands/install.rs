//! Install command implementation

use std::path::Path;

use colored::Colorize;
use rulekit_content::RunMetadata;
use rulekit_core::{CopyPlan, MaterializationEngine, MaterializeReport, SkippedTool, ToolOutcome};
use rulekit_fs::NormalizedPath;
use rulekit_meta::{SelectionValidator, ToolRegistry};

use super::validate::{INVALID_SELECTION, SUCCESS, print_invalid};
use crate::error::Result;

/// Options for the install command
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub project: Option<String>,
    pub vars: Vec<(String, String)>,
    /// If true, print the plan without writing anything
    pub dry_run: bool,
    /// If true, unknown tools are skipped instead of rejected
    pub force: bool,
}

/// Run the install command.
///
/// Returns the process exit status.
pub async fn run_install(
    templates: &Path,
    dest: &Path,
    tools: &[String],
    options: &InstallOptions,
) -> Result<u8> {
    let validator = SelectionValidator::new(ToolRegistry::new(templates));
    let validation = validator.validate(tools)?;
    if !validation.valid {
        if !options.force {
            print_invalid(&validation);
            eprintln!("Use {} to skip unknown tools.", "--force".cyan());
            return Ok(INVALID_SELECTION);
        }
        for error in &validation.errors {
            eprintln!("{} {} (skipping)", "warning:".yellow().bold(), error);
        }
    }

    let engine = MaterializationEngine::mdc(templates);

    if options.dry_run {
        let plan = engine.plan(tools).await?;
        let config = engine.load_config()?;
        let output_root = NormalizedPath::new(dest).join(&config.layout.output_dir);
        print_plan(&plan, &output_root);
        return Ok(SUCCESS);
    }

    let config = engine.load_config()?;
    let project = match &options.project {
        Some(name) => name.clone(),
        None => default_project_name(dest),
    };
    let metadata = options
        .vars
        .iter()
        .fold(RunMetadata::new(project), |meta, (key, value)| {
            meta.with_variable(key, value)
        });

    let destination = NormalizedPath::new(dest);
    tracing::debug!("Installing {:?} into {}", tools, destination);
    let report = engine
        .materialize_with_report(&destination, tools, &metadata, &config)
        .await?;

    print_report(&report, &destination.join(&config.layout.output_dir));
    Ok(SUCCESS)
}

/// Name of the destination directory, used when no project name is given.
pub fn default_project_name(dest: &Path) -> String {
    std::path::absolute(dest)
        .ok()
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string())
}

fn print_skipped<'a>(skipped: impl Iterator<Item = &'a SkippedTool>) {
    for tool in skipped {
        println!(
            "  {} {} ({})",
            "-".yellow(),
            tool.key.yellow(),
            tool.reason.to_string().dimmed()
        );
    }
}

fn print_plan(plan: &CopyPlan, output_root: &NormalizedPath) {
    println!("{}", "Install Plan".bold());
    println!();
    for tool in &plan.tools {
        println!("  {} {}", "+".green(), tool.key.cyan());
        for document in &tool.documents {
            println!("      {}", document);
        }
    }
    print_skipped(plan.skipped.iter());
    println!();
    println!(
        "{} Would write {} document(s) to {}",
        "[dry-run]".dimmed(),
        plan.count(),
        output_root
    );
}

fn print_report(report: &MaterializeReport, output_root: &NormalizedPath) {
    for outcome in &report.outcomes {
        if let ToolOutcome::Written { key, documents } = outcome {
            println!("  {} {} ({} document(s))", "+".green(), key.cyan(), documents);
        }
    }
    print_skipped(report.skipped());
    println!();
    println!(
        "{} Installed {} document(s) into {}",
        "OK".green().bold(),
        report.count,
        output_root
    );
}
