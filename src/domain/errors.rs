//! Domain error types
//!
//! This module defines the error hierarchy for kanilog.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main kanilog error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum KanilogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source API (WaniKani) errors
    #[error("Source API error: {0}")]
    SourceApi(#[from] SourceApiError),

    /// Dataset hub errors
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while fetching pages from the source API
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum SourceApiError {
    /// Failed to reach the API
    #[error("Failed to connect to source API: {0}")]
    ConnectionFailed(String),

    /// Token rejected (401/403)
    #[error("Authentication failed: {status} - {message}")]
    AuthenticationFailed { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Response body is not a page
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// A record lacks a field the flattener needs
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Errors raised while publishing artifacts to the dataset hub
#[derive(Debug, Error)]
pub enum PublishError {
    /// Failed to reach the hub
    #[error("Failed to connect to dataset hub: {0}")]
    ConnectionFailed(String),

    /// Token rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Repository does not exist or is not visible to the token
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    /// Commit rejected by the hub
    #[error("Commit failed: {status} - {message}")]
    CommitFailed { status: u16, message: String },

    /// Local artifact missing or unreadable
    #[error("Artifact unavailable: {0}")]
    ArtifactUnavailable(String),

    /// Invalid allow pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl From<std::io::Error> for KanilogError {
    fn from(err: std::io::Error) -> Self {
        KanilogError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KanilogError {
    fn from(err: serde_json::Error) -> Self {
        KanilogError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for KanilogError {
    fn from(err: csv::Error) -> Self {
        KanilogError::Serialization(format!("CSV write error: {err}"))
    }
}

impl From<toml::de::Error> for KanilogError {
    fn from(err: toml::de::Error) -> Self {
        KanilogError::Configuration(format!("TOML parse error: {err}"))
    }
}
