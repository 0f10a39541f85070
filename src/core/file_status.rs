//! Type-safe file change classification.
//!
//! This module defines [`FileStatus`], the classification the structural diff
//! assigns to each file, together with the short codes and human-readable
//! labels the command layer prints.
//!
//! # Public API
//! - [`FileStatus`]: `Added`, `Modified` or `Deleted`

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Present only in the newer snapshot (A)
    Added,
    /// Present in both with different content (M)
    Modified,
    /// Present only in the older snapshot (D)
    Deleted,
}

impl FileStatus {
    /// Short status code
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Added => "A",
            FileStatus::Modified => "M",
            FileStatus::Deleted => "D",
        }
    }

    /// Label used in `status` listings
    pub fn description(&self) -> &'static str {
        match self {
            FileStatus::Added => "new file",
            FileStatus::Modified => "modified",
            FileStatus::Deleted => "deleted",
        }
    }

    /// The classification seen from the other side of the diff
    pub fn inverse(&self) -> FileStatus {
        match self {
            FileStatus::Added => FileStatus::Deleted,
            FileStatus::Modified => FileStatus::Modified,
            FileStatus::Deleted => FileStatus::Added,
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
