//! Markdown to HTML rendering

use crate::error::Result;
use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown source to sanitized HTML
pub trait MarkdownRenderer: Send + Sync {
    /// Render Markdown text as an HTML fragment
    fn render(&self, markdown: &str) -> Result<String>;
}

/// Renderer backed by pulldown-cmark, with output cleaned by ammonia.
///
/// Scripts, event handler attributes and other unsafe markup are removed;
/// links keep their `href` so mention anchors survive.
pub struct PulldownRenderer {
    options: Options,
    sanitizer: ammonia::Builder<'static>,
}

impl PulldownRenderer {
    /// Create a renderer with tables and strikethrough enabled
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let mut sanitizer = ammonia::Builder::default();
        sanitizer.link_rel(None);

        Self { options, sanitizer }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, parser);
        Ok(self.sanitizer.clean(&body).to_string())
    }
}
