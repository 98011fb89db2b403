//! Comment data models

use crate::types::{ArticleId, CommentId, UserId};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A comment as it is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Author of the comment
    pub author_id: UserId,
    /// Author email at the time of commenting
    pub author_email: String,
    /// Markdown source
    pub content: String,
    /// Creation time in epoch milliseconds
    pub create_time: i64,
    /// Article the comment is attached to
    pub on_article_id: ArticleId,
}

impl Comment {
    /// Creation time as a date value.
    ///
    /// Out-of-range timestamps are logged and mapped to the Unix epoch.
    pub fn created_at(&self) -> DateTime<Utc> {
        match Utc.timestamp_millis_opt(self.create_time).single() {
            Some(at) => at,
            None => {
                warn!(
                    "Comment {} has out-of-range create time {}",
                    self.id, self.create_time
                );
                DateTime::<Utc>::UNIX_EPOCH
            }
        }
    }
}

/// Title and link of the article a comment belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub permalink: String,
}

/// A comment prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: CommentId,
    pub author_id: UserId,
    pub author_email: String,
    pub on_article_id: ArticleId,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// Author display name, empty if the author is unknown
    pub author_name: String,
    /// Author profile URL, empty if the author is unknown
    pub author_url: String,
    pub author_thumbnail_url: String,
    /// Rendered HTML content
    pub content_html: String,
    /// Set when mention linking or rendering failed
    #[serde(default)]
    pub content_degraded: bool,
    /// Parent article, only present on per-user listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleSummary>,
}

/// A recent commenter on an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, empty if the commenter is unknown
    pub name: String,
    pub thumbnail_url: String,
    /// Profile URL, empty if the commenter is unknown
    pub url: String,
    /// Comment that made this user a participant
    pub comment_id: CommentId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment(create_time: i64) -> Comment {
        Comment {
            id: CommentId::from_string("c1"),
            author_id: UserId::from_string("u1"),
            author_email: "alice@example.com".to_string(),
            content: "Test comment".to_string(),
            create_time,
            on_article_id: ArticleId::from_string("a1"),
        }
    }

    #[test]
    fn test_created_at_conversion() {
        let comment = create_test_comment(1_351_468_800_123);
        let at = comment.created_at();
        assert_eq!(at.timestamp_millis(), 1_351_468_800_123);
        assert_eq!(at.format("%Y-%m-%d").to_string(), "2012-10-29");
    }

    #[test]
    fn test_created_at_is_repeatable() {
        let comment = create_test_comment(42);
        assert_eq!(comment.created_at(), comment.created_at());
    }

    #[test]
    fn test_out_of_range_time_falls_back_to_epoch() {
        let comment = create_test_comment(i64::MAX);
        assert_eq!(comment.created_at().timestamp(), 0);
    }

    #[test]
    fn test_comment_serialization() {
        let comment = create_test_comment(1000);
        let json = serde_json::to_string(&comment).unwrap();
        assert!(json.contains("\"create_time\":1000"));
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }

    #[test]
    fn test_view_omits_missing_article() {
        let view = CommentView {
            id: CommentId::from_string("c1"),
            author_id: UserId::from_string("u1"),
            author_email: String::new(),
            on_article_id: ArticleId::from_string("a1"),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            author_name: String::new(),
            author_url: String::new(),
            author_thumbnail_url: String::new(),
            content_html: String::new(),
            content_degraded: false,
            article: None,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("\"article\""));
    }
}
