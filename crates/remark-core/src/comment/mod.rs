//! Comment presentation module
//!
//! Turns stored comments into display-ready views: avatar URLs, author
//! attribution, @mention links and rendered Markdown.

pub mod model;
pub mod avatar;
pub mod content;
pub mod enricher;

pub use model::*;
pub use avatar::AvatarResolver;
pub use content::{ContentProcessor, ProcessedContent};
pub use enricher::CommentEnricher;
