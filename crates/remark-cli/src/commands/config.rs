//! Config command
//!
//! Manage remark configuration.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use std::fs;

use super::Workspace;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Reset to default configuration
    Reset {
        /// Confirm the reset
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, workspace: &Workspace) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(workspace, json),
        ConfigCommand::Validate => validate_config(workspace),
        ConfigCommand::Reset { force } => reset_config(workspace, force),
    }
}

fn show_config(workspace: &Workspace, as_json: bool) -> Result<()> {
    let config = workspace.load_config()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if workspace.config_path.exists() {
        println!("{}", workspace.config_path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults, no config file)".dimmed());
    }
    println!();
    println!("{}", config.to_toml_string()?);

    Ok(())
}

fn validate_config(workspace: &Workspace) -> Result<()> {
    if !workspace.config_path.exists() {
        eprintln!(
            "{} Configuration not found. Run '{}' to create.",
            "⚠".yellow(),
            "remark init".cyan()
        );
        return Ok(());
    }

    let content = fs::read_to_string(&workspace.config_path)?;
    match remark_core::config::Config::from_toml_str(&content) {
        Ok(_) => {
            println!("{} Configuration is valid.", "✓".green());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Configuration has errors: {}", "✗".red(), e);
            Err(e.into())
        }
    }
}

fn reset_config(workspace: &Workspace, force: bool) -> Result<()> {
    if !force {
        eprintln!(
            "{} This overwrites {}. Re-run with {} to confirm.",
            "⚠".yellow(),
            workspace.config_path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    super::init::write_default_config(workspace)?;
    println!("{} Configuration reset to defaults.", "✓".green());
    Ok(())
}
