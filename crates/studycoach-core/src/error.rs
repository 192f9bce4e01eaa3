//! Core error types for studycoach-core.
//!
//! This module defines the error hierarchy using thiserror. Storage and
//! codec failures are recovered locally with safe defaults and never reach
//! callers; only service and auth failures are surfaced, as display text.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studycoach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence slot errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chat proxy errors
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Credential store errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Persistence slot errors.
///
/// The state store swallows all of these: an unreadable slot loads as empty
/// state and a failed write leaves the in-memory cache authoritative.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The slot cannot be used at all (storage disabled, no home dir, ...)
    #[error("persistence slot unavailable: {0}")]
    Unavailable(String),

    /// Reading the slot failed
    #[error("failed to read persistence slot: {0}")]
    ReadFailed(String),

    /// Writing the slot failed
    #[error("failed to write persistence slot: {0}")]
    WriteFailed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Chat proxy errors, surfaced to the UI layer as display strings.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request never completed (network failure, timeout, bad URL)
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-2xx status
    #[error("service returned HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// The service answered 2xx but the body was not the expected shape
    #[error("service reply had no usable body")]
    MissingBody,
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err.to_string())
    }
}

/// Credential store errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
