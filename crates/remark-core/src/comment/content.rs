//! Comment content processing: mention linking, then Markdown rendering

use crate::markdown::MarkdownRenderer;
use crate::mention::{link_mentions, MentionResolver};
use std::sync::Arc;
use tracing::error;

/// Result of processing comment text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedContent {
    /// Best HTML available
    pub html: String,
    /// True when mention linking or rendering failed
    pub degraded: bool,
}

/// Links @mentions and renders Markdown for comment text
pub struct ContentProcessor {
    mentions: Arc<dyn MentionResolver>,
    renderer: Arc<dyn MarkdownRenderer>,
    member_path: String,
}

impl ContentProcessor {
    pub fn new(
        mentions: Arc<dyn MentionResolver>,
        renderer: Arc<dyn MarkdownRenderer>,
        member_path: impl Into<String>,
    ) -> Self {
        Self {
            mentions,
            renderer,
            member_path: member_path.into(),
        }
    }

    /// Link mentions in the text, leaving it untouched if resolution fails
    pub fn link(&self, text: &str) -> (String, bool) {
        match self.mentions.extract_mentioned_usernames(text) {
            Ok(names) => (link_mentions(text, &names, &self.member_path), false),
            Err(e) => {
                error!("Generates @username home URL for comment content failed: {}", e);
                (text.to_string(), true)
            }
        }
    }

    /// Process comment text. Never fails; falls back to less processed text.
    pub fn process(&self, text: &str) -> ProcessedContent {
        let (linked, mut degraded) = self.link(text);

        let html = match self.renderer.render(&linked) {
            Ok(html) => html,
            Err(e) => {
                error!("Markdowns comment content failed: {}", e);
                degraded = true;
                linked
            }
        };

        ProcessedContent { html, degraded }
    }
}
