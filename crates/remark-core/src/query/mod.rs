//! Comment query operations
//!
//! [`CommentQueryService`] exposes the read operations used by request
//! handlers. Build it once at start up and share it by reference.
//!
//! # Example
//!
//! ```ignore
//! use remark_core::query::{CommentQueryService, Repositories};
//!
//! let store = Arc::new(JsonFileStore::open("data")?);
//! let repos = Repositories::from_store(store.clone());
//! let mentions = Arc::new(UserMentionResolver::new(store, 64)?);
//! let service = CommentQueryService::new(repos, mentions, Arc::new(PulldownRenderer::new()), &config);
//!
//! let page = service.article_comments(&article_id, 1, 20)?;
//! ```

mod service;

pub use service::{CommentQueryService, Repositories};
