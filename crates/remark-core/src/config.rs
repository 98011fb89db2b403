//! Configuration management for remark

use crate::error::{RemarkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Avatar settings
    pub avatar: AvatarConfig,
    /// Mention settings
    pub mention: MentionConfig,
    /// Query settings
    pub query: QueryConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        if self.avatar.host.trim().is_empty() {
            return Err(RemarkError::Config("avatar.host must not be empty".to_string()));
        }
        if self.avatar.size == 0 {
            return Err(RemarkError::Config("avatar.size must be positive".to_string()));
        }
        if self.mention.max_username_length == 0 {
            return Err(RemarkError::Config(
                "mention.max_username_length must be positive".to_string(),
            ));
        }
        if self.query.page_size == 0 || self.query.participants_fetch_size == 0 {
            return Err(RemarkError::Config(
                "query sizes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Avatar URL synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Host of the external avatar service
    pub host: String,
    /// Requested avatar size in pixels
    pub size: u32,
    /// Prefix for static resources
    pub static_serve_path: String,
    /// Default thumbnail, relative to the static serve path
    pub default_thumbnail: String,
    /// Placeholder email used for anonymous commenters
    pub default_commenter_email: String,
}

impl AvatarConfig {
    /// Full path of the static default thumbnail
    pub fn default_thumbnail_url(&self) -> String {
        format!("{}{}", self.static_serve_path, self.default_thumbnail)
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            host: "secure.gravatar.com".to_string(),
            size: 140,
            static_serve_path: "http://localhost:8080".to_string(),
            default_thumbnail: "/images/user-thumbnail.png".to_string(),
            default_commenter_email: "default_commenter@b3log.org".to_string(),
        }
    }
}

/// @mention configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionConfig {
    /// Path prefix of member profile pages
    pub member_path: String,
    /// Longest token considered a username
    pub max_username_length: usize,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            member_path: "/member/".to_string(),
            max_username_length: 64,
        }
    }
}

/// Default sizes for query operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Comments per page
    pub page_size: usize,
    /// Number of recent participants to fetch
    pub participants_fetch_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            participants_fetch_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.avatar.host, "secure.gravatar.com");
        assert_eq!(config.avatar.size, 140);
        assert_eq!(config.mention.member_path, "/member/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_thumbnail_url() {
        let avatar = AvatarConfig {
            static_serve_path: "https://static.example.org".to_string(),
            ..AvatarConfig::default()
        };
        assert_eq!(
            avatar.default_thumbnail_url(),
            "https://static.example.org/images/user-thumbnail.png"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[avatar]"));
        assert!(toml.contains("[mention]"));
        assert!(toml.contains("[query]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config.query.page_size, config2.query.page_size);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[avatar]\nsize = 80\n").unwrap();
        assert_eq!(config.avatar.size, 80);
        assert_eq!(config.avatar.host, "secure.gravatar.com");
        assert_eq!(config.query.page_size, 20);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Config::from_toml_str("[query]\npage_size = 0\n");
        assert!(matches!(result, Err(RemarkError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.query.participants_fetch_size, 10);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[mention]\nmember_path = \"/u/\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.mention.member_path, "/u/");
    }
}
