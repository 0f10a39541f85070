//! Commit/branch state machine.
//!
//! Every transition takes the current [`RepoState`] by reference and returns
//! an [`Outcome`]: either a brand-new state or the reason nothing changed.
//! Transitions never panic and never touch the input, so a caller that keeps
//! the old value keeps a consistent view of history.
//!
//! # Transitions
//! - [`create_commit`]: advance the current branch and `HEAD`
//! - [`create_branch`]: add a pointer at `HEAD`
//! - [`switch_branch`]: move `HEAD` and the current branch
//! - [`checkout`]: switch and restore the live files through a [`FileEditor`]
//!
//! Invariant after every applied transition: `HEAD` equals the head of the
//! branch named by `current_branch` (or is `None` when that branch has no
//! commits).

use crate::core::{
    commit_id::commit_id,
    diff::diff_working_tree,
    error::Rejection,
    snapshot::Snapshot,
    state::{Branch, Commit, RepoState},
    workspace::FileEditor,
};
use chrono::{DateTime, Utc};

/// Result of a state transition.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(RepoState),
    Rejected(Rejection),
}

impl Outcome {
    /// The new state, or a copy of `current` when the transition was rejected.
    pub fn resolve(self, current: &RepoState) -> RepoState {
        match self {
            Outcome::Applied(state) => state,
            Outcome::Rejected(_) => current.clone(),
        }
    }

    pub fn into_result(self) -> Result<RepoState, Rejection> {
        match self {
            Outcome::Applied(state) => Ok(state),
            Outcome::Rejected(reason) => Err(reason),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

/// What `checkout` does with uncommitted edits in the live files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutPolicy {
    /// Replace the live files unconditionally; edits are lost.
    #[default]
    DiscardUncommitted,
    /// Refuse while the working tree differs from `HEAD`.
    RefuseDirty,
}

pub fn create_commit(state: &RepoState, message: &str, snapshot: Snapshot) -> Outcome {
    create_commit_at(state, message, snapshot, Utc::now())
}

/// [`create_commit`] with an explicit timestamp.
pub fn create_commit_at(
    state: &RepoState,
    message: &str,
    snapshot: Snapshot,
    timestamp: DateTime<Utc>,
) -> Outcome {
    let id = commit_id(state.head.as_deref(), message, &snapshot, state.commits.len());
    let commit = Commit {
        id: id.clone(),
        message: message.to_string(),
        timestamp,
        files: snapshot,
        parent: state.head.clone(),
    };

    let mut next = state.clone();
    next.commits.push(commit);
    match next
        .branches
        .iter_mut()
        .find(|b| b.name == state.current_branch)
    {
        Some(branch) => branch.head_commit_id = Some(id.clone()),
        None => log::warn!(
            "Current branch '{}' does not exist; commit {} is only reachable from HEAD",
            state.current_branch,
            id
        ),
    }
    next.head = Some(id);

    log::debug!(
        "Committed {} on '{}' ({} file(s))",
        next.head.as_deref().unwrap_or_default(),
        next.current_branch,
        next.commits.last().map_or(0, |c| c.files.len())
    );
    Outcome::Applied(next)
}

pub fn create_branch(state: &RepoState, name: &str) -> Outcome {
    if state.has_branch(name) {
        log::debug!("Branch '{name}' already exists");
        return Outcome::Rejected(Rejection::duplicate_branch(name));
    }

    let mut next = state.clone();
    next.branches.push(Branch::new(name, state.head.clone()));
    Outcome::Applied(next)
}

pub fn switch_branch(state: &RepoState, name: &str) -> Outcome {
    let Some(branch) = state.branch(name) else {
        log::debug!("Cannot switch to unknown branch '{name}'");
        return Outcome::Rejected(Rejection::unknown_branch(name));
    };

    let mut next = state.clone();
    next.head = branch.head_commit_id.clone();
    next.current_branch = branch.name.clone();
    Outcome::Applied(next)
}

/// Follow parent pointers from `HEAD`, newest first.
///
/// Stops after `limit` entries, at a root commit, or at a parent id that does
/// not resolve. The walk is bounded by the number of commits so a corrupted
/// cycle cannot loop forever.
pub fn get_commit_log(state: &RepoState, limit: Option<usize>) -> Vec<&Commit> {
    let limit = limit.unwrap_or(usize::MAX).min(state.commits.len());
    let mut log = Vec::new();
    let mut cursor = state.head.as_deref();

    while let Some(id) = cursor {
        if log.len() >= limit {
            break;
        }
        let Some(commit) = state.find_commit(id) else {
            break;
        };
        log.push(commit);
        cursor = commit.parent.as_deref();
    }
    log
}

/// Switch to `name` and restore its head snapshot into `editor`.
///
/// A branch without commits, or whose head does not resolve, is still
/// switched to but leaves the editor's files as they are.
pub fn checkout<E: FileEditor + ?Sized>(
    state: &RepoState,
    name: &str,
    editor: &mut E,
    policy: CheckoutPolicy,
) -> Outcome {
    let Some(target) = state.branch(name) else {
        return Outcome::Rejected(Rejection::unknown_branch(name));
    };

    // A target already at HEAD restores nothing the working tree could lose.
    if policy == CheckoutPolicy::RefuseDirty
        && target.head_commit_id != state.head
        && !diff_working_tree(state, &editor.snapshot()).is_empty()
    {
        return Outcome::Rejected(Rejection::uncommitted_changes(name));
    }

    let outcome = switch_branch(state, name);
    if let Outcome::Applied(next) = &outcome {
        match next.head_commit() {
            Some(commit) => restore_snapshot(editor, &commit.files),
            None => log::debug!("Branch '{name}' has no resolvable head; live files kept"),
        }
    }
    outcome
}

fn restore_snapshot<E: FileEditor + ?Sized>(editor: &mut E, files: &Snapshot) {
    let active = editor
        .active_file()
        .filter(|name| files.contains_key(name))
        .or_else(|| files.keys().next().cloned());

    editor.replace_all(files.clone());
    editor.set_active_file(active.as_deref());
}
