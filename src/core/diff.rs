//! Structural (file-level) diffs between snapshots.
//!
//! Files are classified with the keyed edit script from [`crate::core::edit`]:
//! an `Insert` is an added file, a `Delete` a deleted one, and a
//! `Delete`+`Insert` pair on the same filename a modification. Unchanged files
//! never appear in the output, which is sorted by filename.

use crate::core::{
    edit::{diff_keyed, Edit},
    error::Rejection,
    file_status::FileStatus,
    snapshot::Snapshot,
    state::{Commit, RepoState},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiff {
    pub filename: String,
    pub status: FileStatus,
    pub old_content: String,
    pub new_content: String,
}

impl FileDiff {
    /// The same change seen from the other side.
    pub fn inverse(&self) -> FileDiff {
        FileDiff {
            filename: self.filename.clone(),
            status: self.status.inverse(),
            old_content: self.new_content.clone(),
            new_content: self.old_content.clone(),
        }
    }
}

/// Per-status counts for a list of file diffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
}

impl DiffSummary {
    pub fn of(diffs: &[FileDiff]) -> Self {
        diffs.iter().fold(Self::default(), |mut summary, d| {
            match d.status {
                FileStatus::Added => summary.added += 1,
                FileStatus::Modified => summary.modified += 1,
                FileStatus::Deleted => summary.deleted += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.added + self.modified + self.deleted
    }
}

pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> Vec<FileDiff> {
    let mut diffs = Vec::new();
    let mut edits = diff_keyed(old, new).into_iter().peekable();

    while let Some((filename, edit)) = edits.next() {
        match edit {
            Edit::Equal(_) => {}
            Edit::Insert(content) => diffs.push(FileDiff {
                filename: filename.clone(),
                status: FileStatus::Added,
                old_content: String::new(),
                new_content: content.clone(),
            }),
            Edit::Delete(old_content) => {
                if let Some((_, Edit::Insert(new_content))) =
                    edits.next_if(|(next, e)| *next == filename && matches!(e, Edit::Insert(_)))
                {
                    diffs.push(FileDiff {
                        filename: filename.clone(),
                        status: FileStatus::Modified,
                        old_content: old_content.clone(),
                        new_content: new_content.clone(),
                    });
                } else {
                    diffs.push(FileDiff {
                        filename: filename.clone(),
                        status: FileStatus::Deleted,
                        old_content: old_content.clone(),
                        new_content: String::new(),
                    });
                }
            }
        }
    }

    diffs
}

pub fn diff_commits(a: &Commit, b: &Commit) -> Vec<FileDiff> {
    diff_snapshots(&a.files, &b.files)
}

/// Diff the live files against the `HEAD` commit.
///
/// Without a resolvable `HEAD` every live file is reported as added.
pub fn diff_working_tree(state: &RepoState, current: &Snapshot) -> Vec<FileDiff> {
    match state.head_commit() {
        Some(head) => diff_snapshots(&head.files, current),
        None => diff_snapshots(&Snapshot::new(), current),
    }
}

/// Diff a commit against its parent; a root commit is diffed against nothing.
pub fn diff_commit_with_parent(
    state: &RepoState,
    id: &str,
) -> std::result::Result<Vec<FileDiff>, Rejection> {
    let commit = state
        .find_commit(id)
        .ok_or_else(|| Rejection::unknown_commit(id))?;

    let parent = commit.parent.as_deref().and_then(|p| state.find_commit(p));
    Ok(match parent {
        Some(parent) => diff_commits(parent, commit),
        None => diff_snapshots(&Snapshot::new(), &commit.files),
    })
}
