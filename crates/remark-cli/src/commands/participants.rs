//! Participants command
//!
//! List the recent commenters of an article.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use remark_core::types::ArticleId;

use super::Workspace;

/// Arguments for the participants command
#[derive(Debug, Args)]
pub struct ParticipantsArgs {
    /// Article ID
    pub article_id: String,

    /// Number of comments to look at (defaults to query.participants_fetch_size)
    #[arg(long, short)]
    pub size: Option<usize>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the participants command
pub fn execute(args: ParticipantsArgs, workspace: &Workspace) -> Result<()> {
    let (service, config) = workspace.open_service()?;
    let size = args.size.unwrap_or(config.query.participants_fetch_size);

    let participants = service
        .article_latest_participants(&ArticleId::from_string(&args.article_id), size)
        .context(format!(
            "Failed to list participants of article '{}'",
            args.article_id
        ))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&participants)?);
        return Ok(());
    }

    if participants.is_empty() {
        println!("{}", "No participants found.".dimmed());
        return Ok(());
    }

    for participant in &participants {
        let name = if participant.name.is_empty() {
            "(unknown)"
        } else {
            participant.name.as_str()
        };
        println!(
            "{} {} {}",
            name.bold(),
            participant.thumbnail_url.dimmed(),
            format!("(comment {})", participant.comment_id).cyan()
        );
    }

    Ok(())
}
