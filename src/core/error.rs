//! Error types for propstore

use std::path::PathBuf;
use thiserror::Error;

/// Shape a top-level key already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    Value,
    Group,
}

impl std::fmt::Display for EntryShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryShape::Value => write!(f, "value"),
            EntryShape::Group => write!(f, "group"),
        }
    }
}

/// Main error type for propstore operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A key is used both as a group and as an ungrouped value
    #[error("Key '{key}' already holds a {existing}")]
    ShapeConflict { key: String, existing: EntryShape },

    /// Literal-form errors
    #[error("Parse error at line {line}, column {column}: {reason}")]
    ParseFailed {
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("Unexpected trailing input at line {line}, column {column}")]
    TrailingInput { line: usize, column: usize },

    /// File-related errors
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Configuration directory not found")]
    ConfigDirNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace configuration file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a new shape conflict error
    pub fn shape_conflict(key: impl Into<String>, existing: EntryShape) -> Self {
        Self::ShapeConflict {
            key: key.into(),
            existing,
        }
    }

    /// Create a new parse error
    pub fn parse_failed(line: usize, column: usize, reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            line,
            column,
            reason: reason.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }
}

/// Result type alias for propstore operations
pub type Result<T> = std::result::Result<T, StoreError>;
