//! Flat file snapshots.
//!
//! A [`Snapshot`] maps a filename (a `/`-separated path) to its full content.
//! Every other component consumes snapshots, so this module also converts the
//! hierarchical collections an editor keeps into the flat form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete set of tracked files at one instant, ordered by filename.
pub type Snapshot = BTreeMap<String, String>;

/// One node of a hierarchical file collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File { content: String },
    Directory { children: BTreeMap<String, FileNode> },
}

impl FileNode {
    pub fn file(content: impl Into<String>) -> Self {
        FileNode::File {
            content: content.into(),
        }
    }

    pub fn directory<I, K>(children: I) -> Self
    where
        I: IntoIterator<Item = (K, FileNode)>,
        K: Into<String>,
    {
        FileNode::Directory {
            children: children.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Editor-side record for a single open file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub content: String,
}

/// Flatten a hierarchy rooted at `root` into `dir/sub/name` keys.
///
/// Empty directories contribute nothing; they cannot be represented in a
/// snapshot.
pub fn snapshot_from_tree(root: &BTreeMap<String, FileNode>) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (name, node) in root {
        flatten_into(&mut snapshot, name, node);
    }
    snapshot
}

fn flatten_into(snapshot: &mut Snapshot, path: &str, node: &FileNode) {
    match node {
        FileNode::File { content } => {
            snapshot.insert(path.to_string(), content.clone());
        }
        FileNode::Directory { children } => {
            for (name, child) in children {
                flatten_into(snapshot, &format!("{path}/{name}"), child);
            }
        }
    }
}

/// Build a snapshot from the editor's keyed file records.
///
/// The record's own `name` wins over the map key when they disagree.
pub fn snapshot_from_files<'a, I>(files: I) -> Snapshot
where
    I: IntoIterator<Item = (&'a String, &'a FileRecord)>,
{
    files
        .into_iter()
        .map(|(_, record)| (record.name.clone(), record.content.clone()))
        .collect()
}
