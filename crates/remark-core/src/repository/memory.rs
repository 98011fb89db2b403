//! In-memory repositories for testing

use super::{ArticleRepository, CommentQuery, CommentRepository, QueryResult, UserRepository};
use crate::comment::Comment;
use crate::error::{RemarkError, Result};
use crate::types::{Article, ArticleId, User, UserId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// In-memory store implementing every repository trait
#[derive(Default)]
pub struct MemoryRepository {
    comments: RwLock<Vec<Comment>>,
    articles: RwLock<HashMap<ArticleId, Article>>,
    users: RwLock<HashMap<UserId, User>>,
    /// When set, every comment fetch fails
    fail_fetch: AtomicBool,
    /// When set, every user lookup fails
    fail_users: AtomicBool,
    fetch_calls: AtomicUsize,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_comment(&self, comment: Comment) {
        self.comments.write().unwrap().push(comment);
    }

    pub fn add_article(&self, article: Article) {
        self.articles
            .write()
            .unwrap()
            .insert(article.id.clone(), article);
    }

    pub fn add_user(&self, user: User) {
        self.users.write().unwrap().insert(user.id.clone(), user);
    }

    /// Make comment fetches fail
    pub fn fail_fetches(&self) {
        self.fail_fetch.store(true, Ordering::SeqCst);
    }

    /// Make user lookups fail
    pub fn fail_user_lookups(&self) {
        self.fail_users.store(true, Ordering::SeqCst);
    }

    /// Number of fetch calls seen so far
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn check_users(&self) -> Result<()> {
        if self.fail_users.load(Ordering::SeqCst) {
            return Err(RemarkError::Repository("user table unavailable".to_string()));
        }
        Ok(())
    }
}

impl CommentRepository for MemoryRepository {
    fn fetch(&self, query: &CommentQuery) -> Result<QueryResult<Comment>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(RemarkError::Repository("comment table unavailable".to_string()));
        }
        let comments = self.comments.read().unwrap();
        Ok(query.execute(comments.iter()))
    }
}

impl ArticleRepository for MemoryRepository {
    fn get(&self, id: &ArticleId) -> Result<Option<Article>> {
        Ok(self.articles.read().unwrap().get(id).cloned())
    }
}

impl UserRepository for MemoryRepository {
    fn get(&self, id: &UserId) -> Result<Option<User>> {
        self.check_users()?;
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        self.check_users()?;
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<User>> {
        self.check_users()?;
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.name == name).cloned())
    }
}
