//! Comment enrichment
//!
//! Builds a [`CommentView`] from a stored [`Comment`]:
//!
//! - converts the creation time to a date value
//! - generates the author thumbnail URL
//! - attaches author name and profile URL
//! - links @mentions and renders Markdown content

use super::avatar::AvatarResolver;
use super::content::ContentProcessor;
use super::model::{Comment, CommentView};
use crate::error::Result;
use crate::repository::UserRepository;
use std::sync::Arc;
use tracing::error;

/// Turns stored comments into display views
pub struct CommentEnricher {
    users: Arc<dyn UserRepository>,
    avatars: AvatarResolver,
    content: ContentProcessor,
}

impl CommentEnricher {
    pub fn new(
        users: Arc<dyn UserRepository>,
        avatars: AvatarResolver,
        content: ContentProcessor,
    ) -> Self {
        Self {
            users,
            avatars,
            content,
        }
    }

    /// Avatar resolver used for thumbnails
    pub fn avatars(&self) -> &AvatarResolver {
        &self.avatars
    }

    /// Enrich a single comment.
    ///
    /// A missing author leaves the author fields empty. Only a failing user
    /// lookup is returned as an error.
    pub fn enrich(&self, comment: &Comment) -> Result<CommentView> {
        let created_at = comment.created_at();
        let author_thumbnail_url = self.avatars.thumbnail_url(&comment.author_email);

        let (author_name, author_url) = match self.users.get(&comment.author_id)? {
            Some(author) => (author.name, author.url),
            None => {
                error!(
                    "Author {} of comment {} not found",
                    comment.author_id, comment.id
                );
                (String::new(), String::new())
            }
        };

        let processed = self.content.process(&comment.content);

        Ok(CommentView {
            id: comment.id.clone(),
            author_id: comment.author_id.clone(),
            author_email: comment.author_email.clone(),
            on_article_id: comment.on_article_id.clone(),
            created_at,
            author_name,
            author_url,
            author_thumbnail_url,
            content_html: processed.html,
            content_degraded: processed.degraded,
            article: None,
        })
    }

    /// Enrich comments in order
    pub fn enrich_all(&self, comments: &[Comment]) -> Result<Vec<CommentView>> {
        comments.iter().map(|c| self.enrich(c)).collect()
    }
}
