//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comments;
pub mod config;
pub mod init;
pub mod participants;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use remark_core::config::Config;
use remark_core::markdown::PulldownRenderer;
use remark_core::mention::UserMentionResolver;
use remark_core::query::{CommentQueryService, Repositories};
use remark_storage::JsonFileStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory used when `--data-dir` is not given and it exists
const LOCAL_DATA_DIR: &str = ".remark";

/// remark - forum comment queries
#[derive(Debug, Parser)]
#[command(name = "remark")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (defaults to <data-dir>/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset directory
    #[arg(long, global = true, env = "REMARK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a data directory and default configuration
    Init(init::InitArgs),

    /// List comments of a user or an article
    #[command(subcommand)]
    Comments(comments::CommentsCommand),

    /// List the recent commenters of an article
    Participants(participants::ParticipantsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Resolved locations shared by all commands
#[derive(Debug, Clone)]
pub struct Workspace {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
}

impl Workspace {
    fn from_cli(cli: &Cli) -> Self {
        let data_dir = cli.data_dir.clone().unwrap_or_else(|| {
            let local = PathBuf::from(LOCAL_DATA_DIR);
            if local.exists() {
                local
            } else {
                remark_storage::default_data_dir()
            }
        });
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.toml"));

        Self {
            data_dir,
            config_path,
        }
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load_config(&self) -> Result<Config> {
        Config::load(&self.config_path)
            .with_context(|| format!("Invalid configuration: {}", self.config_path.display()))
    }

    /// Wire the query service over the dataset directory
    pub fn open_service(&self) -> Result<(CommentQueryService, Config)> {
        let config = self.load_config()?;
        let store = Arc::new(open_store(&self.data_dir)?);

        let mentions = UserMentionResolver::new(store.clone(), config.mention.max_username_length)?;
        let service = CommentQueryService::new(
            Repositories::from_store(store),
            Arc::new(mentions),
            Arc::new(PulldownRenderer::new()),
            &config,
        );

        Ok((service, config))
    }
}

fn open_store(data_dir: &Path) -> Result<JsonFileStore> {
    JsonFileStore::open(data_dir)
        .with_context(|| format!("Failed to open dataset at {}", data_dir.display()))
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let workspace = Workspace::from_cli(&cli);

    // Dispatch to command handler
    match cli.command {
        Commands::Init(args) => init::execute(args, &workspace),
        Commands::Comments(cmd) => comments::execute(cmd, &workspace),
        Commands::Participants(args) => participants::execute(args, &workspace),
        Commands::Config(cmd) => config::execute(cmd, &workspace),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_config_path_follows_data_dir() {
        let cli = Cli::parse_from(["remark", "--data-dir", "/tmp/forum", "participants", "a1"]);
        let workspace = Workspace::from_cli(&cli);
        assert_eq!(workspace.data_dir, PathBuf::from("/tmp/forum"));
        assert_eq!(workspace.config_path, PathBuf::from("/tmp/forum/config.toml"));
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::parse_from([
            "remark",
            "--data-dir",
            "/tmp/forum",
            "--config",
            "/etc/remark.toml",
            "config",
            "show",
        ]);
        let workspace = Workspace::from_cli(&cli);
        assert_eq!(workspace.config_path, PathBuf::from("/etc/remark.toml"));
    }
}
