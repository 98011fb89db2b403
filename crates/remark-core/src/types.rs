//! Core type definitions for remark

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an article
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl ArticleId {
    /// Create an ArticleId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        ArticleId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a UserId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        UserId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An article that comments are attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique article identifier
    pub id: ArticleId,
    /// Article title
    pub title: String,
    /// Article permalink
    pub permalink: String,
}

/// A registered forum member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Email address, as stored
    pub email: String,
    /// Display name, also used for @mentions
    pub name: String,
    /// Profile URL
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        let id = CommentId::from_string("c-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c-1\"");

        let id: ArticleId = serde_json::from_str("\"a-9\"").unwrap();
        assert_eq!(id.as_str(), "a-9");
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![
            CommentId::from_string("c-3"),
            CommentId::from_string("c-1"),
            CommentId::from_string("c-2"),
        ];
        ids.sort();
        assert_eq!(ids[0].to_string(), "c-1");
        assert_eq!(ids[2].to_string(), "c-3");
    }

    #[test]
    fn test_user_url_defaults_to_empty() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.c","name":"alice"}"#).unwrap();
        assert_eq!(user.id, UserId::from_string("u1"));
        assert!(user.url.is_empty());
    }
}
