//! Error types for remark

use thiserror::Error;

/// Main error type for remark
#[derive(Debug, Error)]
pub enum RemarkError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Storage layer failure
    #[error("Repository error: {0}")]
    Repository(String),

    /// Mention resolution failure
    #[error("Mention resolution error: {0}")]
    Mention(String),

    /// Markdown rendering failure
    #[error("Markdown error: {0}")]
    Markdown(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A query operation failed as a whole
    #[error("Service error: {context}")]
    Service {
        context: String,
        #[source]
        source: Box<RemarkError>,
    },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RemarkError>,
    },
}

impl RemarkError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        RemarkError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Wrap an error as a service-level failure of a whole operation
    pub fn service(self, context: impl Into<String>) -> Self {
        RemarkError::Service {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check whether this is a service-level failure
    pub fn is_service(&self) -> bool {
        matches!(self, RemarkError::Service { .. })
    }
}

impl From<toml::de::Error> for RemarkError {
    fn from(err: toml::de::Error) -> Self {
        RemarkError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for RemarkError {
    fn from(err: toml::ser::Error) -> Self {
        RemarkError::Toml(err.to_string())
    }
}

/// Result type alias for remark
pub type Result<T> = std::result::Result<T, RemarkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = RemarkError::Repository("connection reset".to_string());
        assert_eq!(err.to_string(), "Repository error: connection reset");
    }

    #[test]
    fn test_error_with_context() {
        let err = RemarkError::Validation("page must be >= 1".to_string());
        let err = err.with_context("Failed to build query");
        assert!(err.to_string().contains("Failed to build query"));
        assert!(err.to_string().contains("page must be >= 1"));
    }

    #[test]
    fn test_service_error_keeps_cause() {
        let err = RemarkError::Repository("disk gone".to_string()).service("Gets user comments failed");
        assert!(err.is_service());
        assert_eq!(err.to_string(), "Service error: Gets user comments failed");
        let cause = err.source().unwrap();
        assert_eq!(cause.to_string(), "Repository error: disk gone");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RemarkError = io_err.into();
        assert!(matches!(err, RemarkError::Io(_)));
    }
}
