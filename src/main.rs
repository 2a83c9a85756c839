//! create-vibe-template: scaffold a new project from the vibe coding template
//!
//! Copies the bundled React template tree into a fresh directory and prints
//! the next steps. The template itself ships inside the binary.

use anyhow::Result;
use clap::Parser;

mod commands;
mod template;

#[derive(Parser)]
#[command(name = "create-vibe-template")]
#[command(about = "Create a new project with vibe coding template", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to create the project in
    project_directory: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::new::execute(&cli.project_directory)?;

    Ok(())
}
