//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`VirtualGitError`], the error type used by the storage
//! adapters and the command layer, and [`Rejection`], the reason a state
//! transition was refused. Transitions themselves never fail: they return a
//! rejection alongside the untouched state (see [`crate::core::engine::Outcome`]).
//!
//! # Public API
//! - [`VirtualGitError`]: Main error enum for storage and command failures
//! - [`Rejection`]: Why a transition left the state unchanged
//! - [`Result<T>`]: Type alias for `std::result::Result<T, VirtualGitError>`
//!
//! # Error Categories
//! - **Transitions**: unknown branch or commit, duplicate branch, dirty checkout
//! - **Commands**: missing or empty commit message, missing branch name
//! - **Store operations**: directory, read, write, serialization and parse errors

use std::path::PathBuf;
use thiserror::Error;

/// Reason a state transition was refused.
///
/// A rejected transition always leaves the input state exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("pathspec '{name}' did not match any branch")]
    UnknownBranch { name: String },

    #[error("a branch named '{name}' already exists")]
    DuplicateBranch { name: String },

    #[error("commit '{id}' does not exist")]
    UnknownCommit { id: String },

    #[error("your local changes would be overwritten by checkout of '{name}'")]
    UncommittedChanges { name: String },
}

impl Rejection {
    pub fn unknown_branch(name: impl Into<String>) -> Self {
        Self::UnknownBranch { name: name.into() }
    }

    pub fn duplicate_branch(name: impl Into<String>) -> Self {
        Self::DuplicateBranch { name: name.into() }
    }

    pub fn unknown_commit(id: impl Into<String>) -> Self {
        Self::UnknownCommit { id: id.into() }
    }

    pub fn uncommitted_changes(name: impl Into<String>) -> Self {
        Self::UncommittedChanges { name: name.into() }
    }
}

/// Domain-specific error types for virtual-git
#[derive(Error, Debug)]
pub enum VirtualGitError {
    #[error("{0}")]
    Rejected(#[from] Rejection),

    // Command validation errors
    #[error("missing -m \"message\"")]
    MissingMessage,

    #[error("empty commit message")]
    EmptyMessage,

    #[error("missing branch name")]
    MissingBranchName,

    #[error("File does not exist: {filename}")]
    FileNotFound { filename: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Store errors
    #[error("Could not find data directory")]
    DataDirectoryNotFound,

    #[error("Failed to create store directory '{path}': {source}")]
    StoreDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize project data: {source}")]
    StoreSerializationFailed { source: serde_json::Error },

    #[error("Failed to write store file '{path}': {source}")]
    StoreWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read store file '{path}': {source}")]
    StoreReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    StoreParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using VirtualGitError
pub type Result<T> = std::result::Result<T, VirtualGitError>;

impl VirtualGitError {
    /// Create a file not found error
    pub fn file_not_found(filename: impl Into<String>) -> Self {
        Self::FileNotFound {
            filename: filename.into(),
        }
    }

    /// Create a store directory creation failed error
    pub fn store_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StoreDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store serialization failed error
    pub fn store_serialization_failed(source: serde_json::Error) -> Self {
        Self::StoreSerializationFailed { source }
    }

    /// Create a store write failed error
    pub fn store_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store read failed error
    pub fn store_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store parse failed error
    pub fn store_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StoreParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = Rejection::unknown_branch("nope");
        assert_eq!(
            err.to_string(),
            "pathspec 'nope' did not match any branch"
        );

        let err = Rejection::duplicate_branch("main");
        assert_eq!(err.to_string(), "a branch named 'main' already exists");
    }

    #[test]
    fn test_rejection_converts_into_error() {
        let err: VirtualGitError = Rejection::unknown_commit("abc1234").into();
        assert!(matches!(err, VirtualGitError::Rejected(_)));
        assert_eq!(err.to_string(), "commit 'abc1234' does not exist");
    }

    #[test]
    fn test_file_not_found_error() {
        let err = VirtualGitError::file_not_found("index.html");
        assert_eq!(err.to_string(), "File does not exist: index.html");
    }

    #[test]
    fn test_store_directory_creation_failed() {
        let path = PathBuf::from("/test/path");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = VirtualGitError::store_directory_creation_failed(&path, io_err);
        assert!(err.to_string().contains("/test/path"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_store_write_failed() {
        let path = PathBuf::from("/test/project.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no space left");
        let err = VirtualGitError::store_write_failed(&path, io_err);
        assert!(err.to_string().contains("/test/project.json"));
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_store_parse_failed() {
        let path = PathBuf::from("/test/project.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = VirtualGitError::store_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/project.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_command_errors() {
        assert_eq!(
            VirtualGitError::MissingMessage.to_string(),
            "missing -m \"message\""
        );
        assert_eq!(VirtualGitError::EmptyMessage.to_string(), "empty commit message");
    }
}
