//! Init command
//!
//! Create a dataset directory and a default configuration file.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use remark_core::comment::Comment;
use remark_core::config::Config;
use remark_core::types::{Article, ArticleId, CommentId, User, UserId};
use remark_storage::JsonFileStore;
use std::fs;

use super::Workspace;

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Seed the dataset with a small sample forum
    #[arg(long)]
    pub sample: bool,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, workspace: &Workspace) -> Result<()> {
    let mut store = JsonFileStore::open(&workspace.data_dir)
        .with_context(|| format!("Failed to open {}", workspace.data_dir.display()))?;

    if args.sample {
        seed_sample(&mut store);
    }
    store.save().context("Failed to write dataset")?;
    println!(
        "{} Dataset ready at {}",
        "✓".green(),
        workspace.data_dir.display()
    );

    if workspace.config_path.exists() && !args.force {
        println!(
            "{} Keeping existing {} (use --force to overwrite)",
            "⚠".yellow(),
            workspace.config_path.display()
        );
    } else {
        write_default_config(workspace)?;
        println!(
            "{} Wrote {}",
            "✓".green(),
            workspace.config_path.display()
        );
    }

    Ok(())
}

pub(crate) fn write_default_config(workspace: &Workspace) -> Result<()> {
    if let Some(parent) = workspace.config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = Config::default().to_toml_string()?;
    fs::write(&workspace.config_path, content)
        .with_context(|| format!("Failed to write {}", workspace.config_path.display()))?;
    Ok(())
}

fn seed_sample(store: &mut JsonFileStore) {
    let now = chrono::Utc::now().timestamp_millis();

    let users = [("u1", "alice"), ("u2", "bob"), ("u3", "al")];
    for (id, name) in users {
        store.insert_user(User {
            id: UserId::from_string(id),
            email: format!("{}@example.com", name),
            name: name.to_string(),
            url: format!("https://example.com/member/{}", name),
        });
    }

    store.insert_article(Article {
        id: ArticleId::from_string("a1"),
        title: "Welcome to the forum".to_string(),
        permalink: "/article/a1".to_string(),
    });

    let comments = [
        ("c1", "u1", "Hello everyone, **glad** to be here.", 3),
        ("c2", "u2", "@alice welcome! Ping @al too.", 2),
        ("c3", "u3", "Thanks @bob and @alice", 1),
    ];
    for (id, author, content, minutes_ago) in comments {
        let name = match author {
            "u1" => "alice",
            "u2" => "bob",
            _ => "al",
        };
        store.insert_comment(Comment {
            id: CommentId::from_string(id),
            author_id: UserId::from_string(author),
            author_email: format!("{}@example.com", name),
            content: content.to_string(),
            create_time: now - minutes_ago * 60_000,
            on_article_id: ArticleId::from_string("a1"),
        });
    }
}
