//! Repository abstractions
//!
//! The query service reads comments, articles and users only through the
//! traits in this module. Storage backends (see `remark-storage`) implement
//! them; the query types here describe filtering, ordering and pagination so
//! every backend returns the same total order.

mod query;

#[cfg(test)]
pub mod memory;

pub use query::{CommentFilter, CommentQuery, Page, Pagination, QueryResult};

use crate::comment::Comment;
use crate::error::Result;
use crate::types::{Article, ArticleId, User, UserId};

/// Read access to stored comments
pub trait CommentRepository: Send + Sync {
    /// Fetch one or more pages of comments matching the query
    fn fetch(&self, query: &CommentQuery) -> Result<QueryResult<Comment>>;
}

/// Read access to stored articles
pub trait ArticleRepository: Send + Sync {
    /// Get an article by ID
    fn get(&self, id: &ArticleId) -> Result<Option<Article>>;
}

/// Read access to stored users
pub trait UserRepository: Send + Sync {
    /// Get a user by ID
    fn get(&self, id: &UserId) -> Result<Option<User>>;

    /// Get a user by email (exact, case-sensitive)
    fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Get a user by name
    fn get_by_name(&self, name: &str) -> Result<Option<User>>;
}
