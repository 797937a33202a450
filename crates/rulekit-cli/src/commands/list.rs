//! List command for the tool registry

use std::path::Path;

use colored::Colorize;
use rulekit_meta::ToolRegistry;

use crate::error::Result;

/// Run the list-tools command
pub fn run_list_tools(templates: &Path, json: bool) -> Result<()> {
    let registry = ToolRegistry::new(templates);
    let tools = registry.list_tools()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    println!("{}", "Available Tools".bold());
    println!();

    if tools.is_empty() {
        println!("  {}", "None declared".dimmed());
    }
    for tool in &tools {
        if tool.description.is_empty() {
            println!("  {:<14} {}", tool.key.green(), tool.name);
        } else {
            println!(
                "  {:<14} {} ({})",
                tool.key.green(),
                tool.name,
                tool.description.dimmed()
            );
        }
    }

    println!();
    println!(
        "{} {} tools available. Use {} to install one.",
        "Total:".dimmed(),
        tools.len(),
        "rulekit install <tool>".cyan()
    );

    Ok(())
}
