//! Core functionality for virtual-git.
//!
//! This module provides the snapshot model, the commit/branch state machine,
//! both diff engines, the commit graph layout, storage, and UI helpers.

pub mod colors;
pub mod command_init;
pub mod commit_id;
pub mod config;
pub mod diff;
pub mod dirs;
pub mod edit;
pub mod engine;
pub mod error;
pub mod file_status;
pub mod graph;
pub mod line_diff;
pub mod output;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod workspace;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Rejection, Result, VirtualGitError};

// === Data model ===
// Flat snapshots, the hierarchy they are converted from, and repository history
pub use snapshot::{snapshot_from_files, snapshot_from_tree, FileNode, FileRecord, Snapshot};
pub use state::{Branch, Commit, RepoState, DEFAULT_BRANCH};

// === State machine ===
// Pure transitions returning a new state or the reason nothing changed
pub use engine::{
    checkout, create_branch, create_commit, create_commit_at, get_commit_log, switch_branch,
    CheckoutPolicy, Outcome,
};

// === Diffing ===
// File-level classification and line-level rendering, both built on one edit script
pub use diff::{
    diff_commit_with_parent, diff_commits, diff_snapshots, diff_working_tree, DiffSummary,
    FileDiff,
};
pub use file_status::FileStatus;
pub use line_diff::{diff_lines, DiffLine, LineKind};

// === Graph layout ===
pub use graph::{layout_graph, BranchLabel, CommitGraph, EdgeShape, GraphEdge, GraphNode, Lane};

// === Collaborators ===
// Storage adapters and the file-editing interface
pub use store::{load_or_default, JsonFileStore, MemoryStore, ProjectId, RepoStore};
pub use workspace::{FileEditor, MemoryWorkspace};

// === Configuration and command setup ===
pub use command_init::CommandContext;
pub use config::EngineConfig;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, write_hint, write_info, write_section_header, write_success};
