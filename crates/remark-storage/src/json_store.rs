//! JSON dataset storage
//!
//! A data directory holds three files, each a JSON array:
//! `comments.json`, `articles.json` and `users.json`. The whole dataset is
//! loaded into memory on open and served through the repository traits.

use remark_core::comment::Comment;
use remark_core::error::{RemarkError, Result};
use remark_core::repository::{
    ArticleRepository, CommentQuery, CommentRepository, QueryResult, UserRepository,
};
use remark_core::types::{Article, ArticleId, User, UserId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const COMMENTS_FILE: &str = "comments.json";
const ARTICLES_FILE: &str = "articles.json";
const USERS_FILE: &str = "users.json";

/// Raw contents of a data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub comments: Vec<Comment>,
    pub articles: Vec<Article>,
    pub users: Vec<User>,
}

/// File system based repository over a JSON dataset
pub struct JsonFileStore {
    /// Directory holding the dataset files
    data_dir: PathBuf,
    comments: Vec<Comment>,
    articles: HashMap<ArticleId, Article>,
    users: HashMap<UserId, User>,
}

impl JsonFileStore {
    /// Open a data directory, creating it if needed. Missing files are empty.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        ensure_dir(&data_dir)?;

        let dataset = Dataset {
            comments: read_records(&data_dir.join(COMMENTS_FILE))?,
            articles: read_records(&data_dir.join(ARTICLES_FILE))?,
            users: read_records(&data_dir.join(USERS_FILE))?,
        };

        info!(
            "Loaded {} comments, {} articles, {} users from {:?}",
            dataset.comments.len(),
            dataset.articles.len(),
            dataset.users.len(),
            data_dir
        );

        Ok(Self::from_dataset(data_dir, dataset))
    }

    /// Build a store from an in-memory dataset
    pub fn from_dataset(data_dir: impl Into<PathBuf>, dataset: Dataset) -> Self {
        Self {
            data_dir: data_dir.into(),
            comments: dataset.comments,
            articles: dataset
                .articles
                .into_iter()
                .map(|a| (a.id.clone(), a))
                .collect(),
            users: dataset.users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }

    /// Write every dataset file atomically
    pub fn save(&self) -> Result<()> {
        ensure_dir(&self.data_dir)?;

        let mut articles: Vec<&Article> = self.articles.values().collect();
        articles.sort_by(|a, b| a.id.cmp(&b.id));
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));

        self.atomic_write(COMMENTS_FILE, &self.comments)?;
        self.atomic_write(ARTICLES_FILE, &articles)?;
        self.atomic_write(USERS_FILE, &users)?;
        Ok(())
    }

    /// Add or replace a comment (in memory until saved)
    pub fn insert_comment(&mut self, comment: Comment) {
        self.comments.retain(|c| c.id != comment.id);
        self.comments.push(comment);
    }

    /// Add or replace an article (in memory until saved)
    pub fn insert_article(&mut self, article: Article) {
        self.articles.insert(article.id.clone(), article);
    }

    /// Add or replace a user (in memory until saved)
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Number of stored comments
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    fn temp_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!(".{}.tmp", name))
    }

    /// Write to a temp file, then rename over the target
    fn atomic_write<T: Serialize + ?Sized>(&self, name: &str, records: &T) -> Result<()> {
        let temp_path = self.temp_path(name);
        let final_path = self.file_path(name);

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            RemarkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            RemarkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved {:?}", final_path);
        Ok(())
    }
}

impl CommentRepository for JsonFileStore {
    fn fetch(&self, query: &CommentQuery) -> Result<QueryResult<Comment>> {
        Ok(query.execute(&self.comments))
    }
}

impl ArticleRepository for JsonFileStore {
    fn get(&self, id: &ArticleId) -> Result<Option<Article>> {
        Ok(self.articles.get(id).cloned())
    }
}

impl UserRepository for JsonFileStore {
    fn get(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.users.get(id).cloned())
    }

    fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.values().find(|u| u.email == email).cloned())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<User>> {
        Ok(self.users.values().find(|u| u.name == name).cloned())
    }
}

/// Platform data directory for remark
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "remark", "remark")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".remark")
        })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            RemarkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;
        debug!("Created data directory: {:?}", dir);
    }
    Ok(())
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{:?} not present, starting empty", path);
            return Ok(Vec::new());
        }
        Err(e) => return Err(RemarkError::Io(e)),
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        RemarkError::Repository(format!("Failed to parse {}: {}", path.display(), e))
    })
}
