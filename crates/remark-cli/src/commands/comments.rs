//! Comments command
//!
//! List a user's or an article's comments, enriched for display.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use remark_core::comment::CommentView;
use remark_core::types::{ArticleId, UserId};

use super::Workspace;

/// Comments subcommands
#[derive(Debug, Subcommand)]
pub enum CommentsCommand {
    /// Comments written by a user, newest first
    User {
        /// User ID
        user_id: String,

        /// Page number (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: usize,

        /// Page size (defaults to query.page_size)
        #[arg(long, short)]
        size: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Comments on an article, newest first
    Article {
        /// Article ID
        article_id: String,

        /// Page number (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: usize,

        /// Page size (defaults to query.page_size)
        #[arg(long, short)]
        size: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the comments command
pub fn execute(cmd: CommentsCommand, workspace: &Workspace) -> Result<()> {
    let (service, config) = workspace.open_service()?;

    match cmd {
        CommentsCommand::User {
            user_id,
            page,
            size,
            json,
        } => {
            let size = size.unwrap_or(config.query.page_size);
            let views = service
                .user_comments(&UserId::from_string(&user_id), page, size)
                .context(format!("Failed to list comments of user '{}'", user_id))?;
            print_comments(&views, json)
        }
        CommentsCommand::Article {
            article_id,
            page,
            size,
            json,
        } => {
            let size = size.unwrap_or(config.query.page_size);
            let views = service
                .article_comments(&ArticleId::from_string(&article_id), page, size)
                .context(format!("Failed to list comments of article '{}'", article_id))?;
            print_comments(&views, json)
        }
    }
}

fn print_comments(views: &[CommentView], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("{}", "No comments found.".dimmed());
        return Ok(());
    }

    for view in views {
        let author = if view.author_name.is_empty() {
            "(unknown)".to_string()
        } else {
            view.author_name.clone()
        };

        print!(
            "{} {} {}",
            view.id.to_string().cyan(),
            view.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            author.bold()
        );
        if let Some(article) = &view.article {
            print!(" on {}", article.title.yellow());
        }
        if view.content_degraded {
            print!(" {}", "[unprocessed]".red());
        }
        println!();

        for line in view.content_html.lines() {
            println!("    {}", line);
        }
    }

    Ok(())
}
