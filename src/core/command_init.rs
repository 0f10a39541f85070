//! Centralized initialization for every CLI command.
//!
//! This module provides [`CommandContext`], which resolves the data directory,
//! loads the configuration, and restores one project's history and live files
//! from the [`JsonFileStore`].
//!
//! # Initialization Steps
//! 1. **Data directory**: `--home` override or the per-user directory
//! 2. **Configuration**: `config.json`, defaults when absent
//! 3. **History**: stored [`RepoState`], or a fresh one on the default branch
//! 4. **Live files**: stored [`MemoryWorkspace`], or an empty one

use crate::core::{
    config::EngineConfig,
    dirs::resolve_data_directory,
    engine::Outcome,
    error::Result,
    state::RepoState,
    store::{load_or_default, JsonFileStore, ProjectId, RepoStore},
    workspace::MemoryWorkspace,
};
use std::path::Path;

pub struct CommandContext {
    pub project: ProjectId,
    pub config: EngineConfig,
    pub store: JsonFileStore,
    pub state: RepoState,
    pub workspace: MemoryWorkspace,
}

impl CommandContext {
    pub fn initialize(home: Option<&Path>, project: &str) -> Result<Self> {
        let data_dir = resolve_data_directory(home)?;
        log::debug!("Using data directory: {}", data_dir.display());

        let config = EngineConfig::load_from(&data_dir)?;
        let store = JsonFileStore::new(&data_dir);
        let project = ProjectId::new(project);

        let state = load_or_default(&store, &project, &config.default_branch);
        let workspace = store.load_workspace(&project);

        log::debug!(
            "Loaded project '{}': {} commit(s), {} branch(es), {} live file(s)",
            project,
            state.commits.len(),
            state.branches.len(),
            workspace.files.len()
        );

        Ok(Self {
            project,
            config,
            store,
            state,
            workspace,
        })
    }

    /// Adopt an applied transition and persist it; surface a rejection as an error.
    pub fn apply(&mut self, outcome: Outcome) -> Result<()> {
        let next = outcome.into_result()?;
        self.store.save(&self.project, &next);
        self.state = next;
        Ok(())
    }

    pub fn save_workspace(&self) -> Result<()> {
        self.store.save_workspace(&self.project, &self.workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        engine::{create_branch, create_commit},
        error::VirtualGitError,
        snapshot::Snapshot,
    };
    use tempfile::TempDir;

    #[test]
    fn test_fresh_project_uses_configured_branch() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        EngineConfig {
            default_branch: "trunk".to_string(),
            ..EngineConfig::default()
        }
        .save_to(home.path())?;

        let context = CommandContext::initialize(Some(home.path()), "site")?;
        assert_eq!(context.state.current_branch, "trunk");
        assert!(context.workspace.files.is_empty());
        Ok(())
    }

    #[test]
    fn test_apply_persists_between_contexts() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        let mut context = CommandContext::initialize(Some(home.path()), "site")?;

        context.workspace.write_file("a.txt", "1");
        context.save_workspace()?;
        let outcome = create_commit(&context.state, "init", Snapshot::new());
        context.apply(outcome)?;

        let reloaded = CommandContext::initialize(Some(home.path()), "site")?;
        assert_eq!(reloaded.state, context.state);
        assert_eq!(reloaded.workspace.read_file("a.txt"), Some("1"));

        let other = CommandContext::initialize(Some(home.path()), "other")?;
        assert!(other.state.commits.is_empty());
        Ok(())
    }

    #[test]
    fn test_apply_surfaces_rejection() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        let mut context = CommandContext::initialize(Some(home.path()), "site")?;
        let before = context.state.clone();

        let outcome = create_branch(&context.state, "main");
        let err = context.apply(outcome).unwrap_err();
        assert!(matches!(err, VirtualGitError::Rejected(_)));
        assert_eq!(context.state, before);
        Ok(())
    }
}
