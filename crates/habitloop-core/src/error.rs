//! Core error types for habitloop-core.
//!
//! This module defines the error hierarchy using thiserror. No error here is
//! fatal to the application: sync parse failures are recovered after being
//! reported, and everything else is surfaced to the caller as a `Result`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Synchronization errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Label registry errors
    #[error("Label error: {0}")]
    Label(#[from] LabelError),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

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

/// Synchronization-specific errors.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Notification payload failed to parse as a status snapshot
    #[error("Malformed status snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// Notification carried no payload for a key that requires one
    #[error("Empty notification payload for key '{key}'")]
    EmptyPayload { key: String },
}

/// Label registry errors.
#[derive(Error, Debug)]
pub enum LabelError {
    /// Replacement list contains the same identifier more than once
    #[error("Duplicate label id '{id}' in replacement list")]
    DuplicateId { id: String },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to create the data directory
    #[error("Failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store database is locked")]
    Locked,
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

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
