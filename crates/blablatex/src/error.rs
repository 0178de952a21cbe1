//! Error types for the blablatex library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blablatex operations.
#[derive(Debug, Error)]
pub enum BlablaError {
    /// Language code without a scoring endpoint.
    #[error("Unsupported language: {0} (use en, de or es)")]
    UnsupportedLanguage(String),

    /// The scoring service answered with a non-success status.
    #[error("Scoring service at '{url}' returned HTTP {status}")]
    Service { url: String, status: u16 },

    /// The scoring response did not contain a usable index.
    #[error("Could not parse scoring response: {0}")]
    Parse(String),

    /// Backup file collision or inconsistent rename state.
    #[error("Backup error for '{path}': {message}")]
    Backup { path: PathBuf, message: String },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level failure talking to the scoring service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlablaError {
    /// Build an IO error bound to a path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BlablaError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a backup error bound to a path.
    pub(crate) fn backup(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BlablaError::Backup {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this is a backup precondition failure.
    ///
    /// Backup failures leave the file untouched, so a batch run can skip
    /// the file and carry on.
    pub fn is_backup(&self) -> bool {
        matches!(self, BlablaError::Backup { .. })
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            BlablaError::UnsupportedLanguage(_) => "unsupported_language",
            BlablaError::Service { .. } => "service",
            BlablaError::Parse(_) => "parse",
            BlablaError::Backup { .. } => "backup",
            BlablaError::Io { .. } => "io",
            BlablaError::Http(_) => "http",
            BlablaError::Config(_) => "config",
        }
    }
}

/// Result type alias for blablatex operations.
pub type Result<T> = std::result::Result<T, BlablaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_backup() {
        let err = BlablaError::backup("paper.tex.org", "already exists");
        assert!(err.is_backup());
        assert!(err.to_string().contains("paper.tex.org"));

        let err = BlablaError::Parse("no index".to_string());
        assert!(!err.is_backup());
    }

    #[test]
    fn test_service_message() {
        let err = BlablaError::Service {
            url: "http://localhost/index.php".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "Scoring service at 'http://localhost/index.php' returned HTTP 503"
        );
    }
}
