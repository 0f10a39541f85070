//! Virtual Git - an embedded, in-memory version history for a set of files.
//!
//! This library records full-snapshot commits on named branches, diffs
//! snapshots at file and line level, and lays the commit history out as a
//! lane/row graph. Every transition is a pure function from one immutable
//! [`RepoState`] to the next.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Snapshot conversion and repository state types
//! - The commit/branch state machine and checkout integration
//! - Structural and line-level diffs
//! - Commit graph layout
//! - Storage adapters, configuration and error types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    checkout,
    create_branch,
    create_commit,
    create_commit_at,
    diff_commit_with_parent,
    diff_commits,
    diff_lines,
    diff_snapshots,
    diff_working_tree,
    get_commit_log,
    layout_graph,
    load_or_default,
    snapshot_from_files,
    snapshot_from_tree,
    switch_branch,

    Branch,
    CheckoutPolicy,
    Commit,
    CommitGraph,
    DiffLine,
    DiffSummary,
    EngineConfig,
    FileDiff,
    FileEditor,
    FileNode,
    FileRecord,
    FileStatus,
    GraphEdge,
    GraphNode,
    JsonFileStore,
    LineKind,
    MemoryStore,
    MemoryWorkspace,
    Outcome,
    ProjectId,
    Rejection,
    RepoState,
    RepoStore,
    Result,
    Snapshot,
    VirtualGitError,
};
