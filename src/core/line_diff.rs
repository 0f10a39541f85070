//! Approximate line-level diff for rendering one file's two versions.
//!
//! The entries come from [`diff_sequences`] over the `\n`-separated lines of
//! each side. Output is capped at [`MAX_DIFF_LINES`] entries; when the cap
//! cuts the walk short a single [`TRUNCATED_MARKER`] entry is appended.

use crate::core::edit::{diff_sequences, Edit};
use serde::{Deserialize, Serialize};

pub const MAX_DIFF_LINES: usize = 500;
pub const TRUNCATED_MARKER: &str = "... (truncated)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Same,
    Add,
    Del,
}

impl LineKind {
    /// Gutter character in unified output
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Same => ' ',
            LineKind::Add => '+',
            LineKind::Del => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub text: String,
}

impl DiffLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub fn diff_lines(old_content: &str, new_content: &str) -> Vec<DiffLine> {
    diff_lines_with_limit(old_content, new_content, MAX_DIFF_LINES)
}

pub fn diff_lines_with_limit(old_content: &str, new_content: &str, limit: usize) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old_content.split('\n').collect();
    let new_lines: Vec<&str> = new_content.split('\n').collect();

    let script = diff_sequences(&old_lines, &new_lines, Some(limit));
    let mut lines: Vec<DiffLine> = script
        .edits
        .into_iter()
        .map(|edit| match edit {
            Edit::Equal(text) => DiffLine::new(LineKind::Same, *text),
            Edit::Insert(text) => DiffLine::new(LineKind::Add, *text),
            Edit::Delete(text) => DiffLine::new(LineKind::Del, *text),
        })
        .collect();

    if script.truncated {
        lines.push(DiffLine::new(LineKind::Same, TRUNCATED_MARKER));
    }
    lines
}
