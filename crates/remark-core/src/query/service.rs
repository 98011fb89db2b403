//! Comment query service

use crate::comment::{
    ArticleSummary, AvatarResolver, Comment, CommentEnricher, CommentView, ContentProcessor,
    Participant,
};
use crate::config::Config;
use crate::error::Result;
use crate::markdown::MarkdownRenderer;
use crate::mention::MentionResolver;
use crate::repository::{ArticleRepository, CommentQuery, CommentRepository, Page, UserRepository};
use crate::types::{ArticleId, UserId};
use std::sync::Arc;
use tracing::{debug, error};

/// Handles to the repositories the service reads from
#[derive(Clone)]
pub struct Repositories {
    pub comments: Arc<dyn CommentRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// Use one store for all three repositories
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CommentRepository + ArticleRepository + UserRepository + 'static,
    {
        Self {
            comments: store.clone(),
            articles: store.clone(),
            users: store,
        }
    }
}

/// Read operations over forum comments
pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
    articles: Arc<dyn ArticleRepository>,
    users: Arc<dyn UserRepository>,
    enricher: CommentEnricher,
}

impl CommentQueryService {
    /// Create a service from its collaborators
    pub fn new(
        repos: Repositories,
        mentions: Arc<dyn MentionResolver>,
        renderer: Arc<dyn MarkdownRenderer>,
        config: &Config,
    ) -> Self {
        let content = ContentProcessor::new(mentions, renderer, config.mention.member_path.clone());
        let avatars = AvatarResolver::new(config.avatar.clone());
        let enricher = CommentEnricher::new(repos.users.clone(), avatars, content);

        Self {
            comments: repos.comments,
            articles: repos.articles,
            users: repos.users,
            enricher,
        }
    }

    /// Comments written by a user, newest first, annotated with their article.
    ///
    /// Returns an empty list if the user has no comments on that page.
    pub fn user_comments(
        &self,
        user_id: &UserId,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<CommentView>> {
        let query = CommentQuery::by_author(user_id.clone(), Page::new(page, page_size)?);

        self.load_user_comments(&query).map_err(|e| {
            error!("Gets user [{}] comments failed: {}", user_id, e);
            e.service(format!("Gets user [{}] comments failed", user_id))
        })
    }

    /// Most recent commenters of an article, newest comment first.
    ///
    /// One participant is produced per fetched comment, so a user may appear
    /// more than once.
    pub fn article_latest_participants(
        &self,
        article_id: &ArticleId,
        fetch_size: usize,
    ) -> Result<Vec<Participant>> {
        let query = CommentQuery::on_article(article_id.clone(), Page::first(fetch_size)?);

        self.load_participants(&query).map_err(|e| {
            error!("Gets article [{}] participants failed: {}", article_id, e);
            e.service(format!("Gets article [{}] participants failed", article_id))
        })
    }

    /// One page of an article's comments, newest first.
    ///
    /// Returns an empty list if the article has no comments on that page.
    pub fn article_comments(
        &self,
        article_id: &ArticleId,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<CommentView>> {
        let query = CommentQuery::on_article(article_id.clone(), Page::new(page, page_size)?);

        self.fetch(&query)
            .and_then(|comments| self.enricher.enrich_all(&comments))
            .map_err(|e| {
                error!("Gets article [{}] comments failed: {}", article_id, e);
                e.service(format!("Gets article [{}] comments failed", article_id))
            })
    }

    fn fetch(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        let result = self.comments.fetch(query)?;
        debug!(
            "Fetched {} of {} comments for {:?}",
            result.records.len(),
            result.pagination.record_count,
            query.filter
        );
        Ok(result.records)
    }

    fn load_user_comments(&self, query: &CommentQuery) -> Result<Vec<CommentView>> {
        let comments = self.fetch(query)?;
        let mut views = Vec::with_capacity(comments.len());

        for comment in &comments {
            let mut view = self.enricher.enrich(comment)?;

            let summary = match self.articles.get(&comment.on_article_id)? {
                Some(article) => ArticleSummary {
                    title: article.title,
                    permalink: article.permalink,
                },
                None => {
                    error!(
                        "Article {} of comment {} not found",
                        comment.on_article_id, comment.id
                    );
                    ArticleSummary::default()
                }
            };
            view.article = Some(summary);

            views.push(view);
        }

        Ok(views)
    }

    fn load_participants(&self, query: &CommentQuery) -> Result<Vec<Participant>> {
        let comments = self.fetch(query)?;
        let mut participants = Vec::with_capacity(comments.len());

        for comment in comments {
            let email = comment.author_email.as_str();
            let (name, url) = match self.users.get_by_email(email)? {
                Some(commenter) => (commenter.name, commenter.url),
                None => {
                    error!("Commenter of comment {} not found by email", comment.id);
                    (String::new(), String::new())
                }
            };

            participants.push(Participant {
                name,
                thumbnail_url: self.enricher.avatars().thumbnail_url(email),
                url,
                comment_id: comment.id,
            });
        }

        Ok(participants)
    }
}
