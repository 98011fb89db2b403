//! Avatar URL synthesis

use crate::config::AvatarConfig;
use md5::{Digest, Md5};

/// Builds thumbnail URLs for commenters from their email
#[derive(Debug, Clone)]
pub struct AvatarResolver {
    config: AvatarConfig,
    default_thumbnail: String,
}

impl AvatarResolver {
    pub fn new(config: AvatarConfig) -> Self {
        let default_thumbnail = config.default_thumbnail_url();
        Self {
            config,
            default_thumbnail,
        }
    }

    /// Thumbnail URL for an email, as stored (no case folding)
    pub fn thumbnail_url(&self, email: &str) -> String {
        if email == self.config.default_commenter_email {
            return self.default_thumbnail.clone();
        }

        format!(
            "http://{}/avatar/{}?s={}&d={}",
            self.config.host,
            md5_hex(email),
            self.config.size,
            urlencoding::encode(&self.default_thumbnail)
        )
    }
}

impl Default for AvatarResolver {
    fn default() -> Self {
        Self::new(AvatarConfig::default())
    }
}

fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
