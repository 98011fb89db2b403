//! Comment query description and evaluation

use crate::comment::Comment;
use crate::error::{RemarkError, Result};
use crate::types::{ArticleId, UserId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which comments a query selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentFilter {
    /// Comments written by a user
    ByAuthor(UserId),
    /// Comments attached to an article
    OnArticle(ArticleId),
}

impl CommentFilter {
    /// Check whether a comment is selected by this filter
    pub fn matches(&self, comment: &Comment) -> bool {
        match self {
            CommentFilter::ByAuthor(id) => &comment.author_id == id,
            CommentFilter::OnArticle(id) => &comment.on_article_id == id,
        }
    }
}

/// Page window of a query. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Current page number
    pub current: usize,
    /// Records per page
    pub size: usize,
    /// Number of pages fetched at once
    pub count: usize,
}

impl Page {
    /// A single page with the given number and size
    pub fn new(current: usize, size: usize) -> Result<Self> {
        if current == 0 {
            return Err(RemarkError::Validation(
                "page number must be >= 1".to_string(),
            ));
        }
        if size == 0 {
            return Err(RemarkError::Validation("page size must be >= 1".to_string()));
        }
        Ok(Self {
            current,
            size,
            count: 1,
        })
    }

    /// The first page with the given size
    pub fn first(size: usize) -> Result<Self> {
        Self::new(1, size)
    }

    /// Index of the first record in the window
    pub fn offset(&self) -> usize {
        (self.current - 1).saturating_mul(self.size)
    }

    /// Maximum number of records in the window
    pub fn limit(&self) -> usize {
        self.size.saturating_mul(self.count)
    }
}

/// Filter, order and page window for a comment fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentQuery {
    pub filter: CommentFilter,
    pub page: Page,
}

impl CommentQuery {
    /// Newest-first comments of a user
    pub fn by_author(author_id: UserId, page: Page) -> Self {
        Self {
            filter: CommentFilter::ByAuthor(author_id),
            page,
        }
    }

    /// Newest-first comments of an article
    pub fn on_article(article_id: ArticleId, page: Page) -> Self {
        Self {
            filter: CommentFilter::OnArticle(article_id),
            page,
        }
    }

    /// Newest first; equal creation times fall back to ascending comment ID
    pub fn compare(&self, a: &Comment, b: &Comment) -> Ordering {
        b.create_time
            .cmp(&a.create_time)
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Evaluate the query over an in-memory collection
    pub fn execute<'a>(&self, comments: impl IntoIterator<Item = &'a Comment>) -> QueryResult<Comment> {
        let mut matched: Vec<&Comment> = comments
            .into_iter()
            .filter(|c| self.filter.matches(c))
            .collect();
        matched.sort_by(|a, b| self.compare(a, b));

        let record_count = matched.len();
        let records = matched
            .into_iter()
            .skip(self.page.offset())
            .take(self.page.limit())
            .cloned()
            .collect();

        QueryResult {
            records,
            pagination: Pagination::new(record_count, self.page.size),
        }
    }
}

/// Totals of a paginated fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records matching the filter
    pub record_count: usize,
    /// Number of pages at the requested size
    pub page_count: usize,
}

impl Pagination {
    /// Compute totals for a record count and page size
    pub fn new(record_count: usize, page_size: usize) -> Self {
        let page_count = if page_size == 0 {
            0
        } else {
            record_count.div_ceil(page_size)
        };
        Self {
            record_count,
            page_count,
        }
    }
}

/// Ordered records of one fetch plus totals
#[derive(Debug, Clone, Default)]
pub struct QueryResult<T> {
    pub records: Vec<T>,
    pub pagination: Pagination,
}
