//! New command - Materialize the template into a fresh project directory

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::env;

use super::utils;
use crate::template;

/// Execute the new command
pub fn execute(project_directory: &str) -> Result<()> {
    let target = env::current_dir()
        .context("Could not determine current directory")?
        .join(project_directory);

    // scaffold re-checks before writing; this keeps the message order sane
    if target.exists() {
        bail!("Directory {} already exists", project_directory);
    }

    println!(
        "{}",
        format!("Creating a new project in {}", target.display()).blue()
    );

    let report = template::scaffold(&target)?;

    println!("{}", "Project created successfully!".green());
    println!(
        "  {} files ({})",
        report.files,
        utils::format_size(report.bytes)
    );
    println!();
    println!("Next steps:");
    println!("  cd {}", project_directory);
    println!("  pnpm install");
    println!("  pnpm dev");

    Ok(())
}
