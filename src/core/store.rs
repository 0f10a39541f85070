//! Durable storage for repository histories.
//!
//! Persistence is best-effort: [`RepoStore::load`] yields `None` for a missing
//! or unreadable record and [`RepoStore::save`] logs failures instead of
//! returning them, so storage trouble never blocks a state transition.
//!
//! # Public API
//! - [`ProjectId`]: Explicit identity of the project whose history is stored
//! - [`RepoStore`]: Load/save adapter trait
//! - [`JsonFileStore`]: One pretty-printed JSON file per project on disk
//! - [`MemoryStore`]: In-process store for tests and embedding
//! - [`load_or_default`]: Stored history or a fresh one
//!
//! # Storage Layout
//! ```text
//! <data dir>/projects/<md5(project id)>.json            repository state
//! <data dir>/projects/<md5(project id)>.workspace.json  live files
//! ```

use crate::core::{
    error::{Result, VirtualGitError},
    state::RepoState,
    workspace::MemoryWorkspace,
};
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-system safe key derived from the id.
    pub fn storage_key(&self) -> String {
        format!("{:x}", md5::compute(self.0.as_bytes()))
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait RepoStore {
    fn load(&self, project: &ProjectId) -> Option<RepoState>;

    fn save(&self, project: &ProjectId, state: &RepoState);
}

/// The stored history of `project`, or a fresh one on `default_branch`.
pub fn load_or_default<S: RepoStore + ?Sized>(
    store: &S,
    project: &ProjectId,
    default_branch: &str,
) -> RepoState {
    store.load(project).unwrap_or_else(|| {
        log::debug!("Starting a fresh history for project '{project}'");
        RepoState::new(default_branch)
    })
}

pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join("projects"),
        }
    }

    pub fn state_path(&self, project: &ProjectId) -> PathBuf {
        self.root.join(format!("{}.json", project.storage_key()))
    }

    pub fn workspace_path(&self, project: &ProjectId) -> PathBuf {
        self.root
            .join(format!("{}.workspace.json", project.storage_key()))
    }

    pub fn try_load(&self, project: &ProjectId) -> Result<Option<RepoState>> {
        read_json(&self.state_path(project))
    }

    pub fn try_save(&self, project: &ProjectId, state: &RepoState) -> Result<()> {
        write_json(&self.root, &self.state_path(project), state)?;
        log::debug!(
            "Saved {} commit(s) for project '{project}'",
            state.commits.len()
        );
        Ok(())
    }

    /// Persisted live files; an unreadable record yields an empty workspace.
    pub fn load_workspace(&self, project: &ProjectId) -> MemoryWorkspace {
        match read_json(&self.workspace_path(project)) {
            Ok(workspace) => workspace.unwrap_or_default(),
            Err(e) => {
                log::warn!("Discarding unreadable workspace for project '{project}': {e}");
                MemoryWorkspace::default()
            }
        }
    }

    pub fn save_workspace(&self, project: &ProjectId, workspace: &MemoryWorkspace) -> Result<()> {
        write_json(&self.root, &self.workspace_path(project), workspace)
    }
}

impl RepoStore for JsonFileStore {
    fn load(&self, project: &ProjectId) -> Option<RepoState> {
        match self.try_load(project) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring stored history for project '{project}': {e}");
                None
            }
        }
    }

    fn save(&self, project: &ProjectId, state: &RepoState) {
        if let Err(e) = self.try_save(project, state) {
            log::warn!("History for project '{project}' was not saved: {e}");
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        log::debug!("Store file does not exist: {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read store file '{}': {}", path.display(), e);
        VirtualGitError::store_read_failed(path, e)
    })?;

    let value = serde_json::from_str(&content).map_err(|e| {
        log::error!("Failed to parse store file '{}': {}", path.display(), e);
        VirtualGitError::store_parse_failed(path, e)
    })?;

    Ok(Some(value))
}

fn write_json<T: Serialize>(dir: &Path, path: &Path, value: &T) -> Result<()> {
    if let Err(e) = fs::create_dir_all(dir) {
        log::error!("Failed to create store directory '{}': {}", dir.display(), e);
        return Err(VirtualGitError::store_directory_creation_failed(dir, e));
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| {
        log::error!("Failed to serialize store data: {e}");
        VirtualGitError::store_serialization_failed(e)
    })?;

    if let Err(e) = fs::write(path, json) {
        log::error!("Failed to write store file '{}': {}", path.display(), e);
        return Err(VirtualGitError::store_write_failed(path, e));
    }
    Ok(())
}

#[derive(Default)]
pub struct MemoryStore {
    states: RefCell<HashMap<ProjectId, RepoState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepoStore for MemoryStore {
    fn load(&self, project: &ProjectId) -> Option<RepoState> {
        self.states.borrow().get(project).cloned()
    }

    fn save(&self, project: &ProjectId, state: &RepoState) {
        self.states
            .borrow_mut()
            .insert(project.clone(), state.clone());
    }
}
