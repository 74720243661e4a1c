// src/error.rs

//! Unified error handling for the catalog crawler.

use std::fmt;

use thiserror::Error;

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A course with the same code is already stored
    #[error("Course {0} already exists")]
    DuplicateCourse(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Create a status error for a request URL.
    pub fn status(url: impl fmt::Display, status: reqwest::StatusCode) -> Self {
        Self::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage error.
    pub fn storage(message: impl fmt::Display) -> Self {
        Self::Storage(message.to_string())
    }

    /// Whether the upstream rejected the request with a 4xx status.
    ///
    /// The grades source answers this way for courses it has no data on.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Status { status, .. } => (400..500).contains(status),
            Self::Http(e) => e.status().is_some_and(|s| s.is_client_error()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_covers_4xx_only() {
        let not_found = AppError::Status {
            url: "https://example.com".into(),
            status: 404,
        };
        let server = AppError::Status {
            url: "https://example.com".into(),
            status: 503,
        };
        assert!(not_found.is_client_error());
        assert!(!server.is_client_error());
        assert!(!AppError::config("x").is_client_error());
    }
}
