//! Repository state data structures.
//!
//! This module defines the immutable records the state machine works on. A
//! [`RepoState`] is never edited in place by the engine: every transition
//! builds a new value, so a caller holding the previous one always sees a
//! consistent history.
//!
//! # Public API
//! - [`Commit`]: Immutable, timestamped full snapshot with a parent pointer
//! - [`Branch`]: Named pointer to a head commit
//! - [`RepoState`]: Complete history of one project
//!
//! # Storage Format
//! - **JSON serialization**: camelCase keys, `HEAD` for the head pointer
//! - **Branch heads**: a branch without commits stores `""` as its head

use crate::core::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the trunk branch a fresh repository starts on.
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub files: Snapshot,
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    #[serde(with = "empty_as_none", default)]
    pub head_commit_id: Option<String>,
}

impl Branch {
    pub fn new(name: impl Into<String>, head_commit_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            head_commit_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoState {
    pub commits: Vec<Commit>,
    pub branches: Vec<Branch>,
    pub current_branch: String,
    #[serde(rename = "HEAD")]
    pub head: Option<String>,
}

impl RepoState {
    /// Empty history with a single commitless branch.
    pub fn new(default_branch: &str) -> Self {
        Self {
            commits: Vec::new(),
            branches: vec![Branch::new(default_branch, None)],
            current_branch: default_branch.to_string(),
            head: None,
        }
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branch(name).is_some()
    }

    pub fn find_commit(&self, id: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id == id)
    }

    /// The commit `HEAD` points at, if it resolves.
    pub fn head_commit(&self) -> Option<&Commit> {
        self.head.as_deref().and_then(|id| self.find_commit(id))
    }
}

impl Default for RepoState {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH)
    }
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|id| !id.is_empty()))
    }
}
