//! Error types for ReadVault
//!
//! All errors in the library are converted to `AppError`. Every failure in
//! this scope is a rejected local mutation, never a crash: callers surface
//! `Validation` and `Unauthorized` to the user and recover.

use thiserror::Error;

/// Application-wide error type
///
/// This enum represents all possible errors that can occur
/// in the library core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found (unknown book id)
    #[error("Resource not found")]
    NotFound,

    /// Authentication required (review/chat without a session)
    #[error("Authentication required")]
    Unauthorized,

    /// Validation error (bad rating range, empty comment, malformed email)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session persistence error (unreadable or unwritable session record)
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
