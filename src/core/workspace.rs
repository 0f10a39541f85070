//! The file-editing collaborator.
//!
//! The engine never owns live files. It reads them through
//! [`FileEditor::snapshot`] and, on checkout, hands a restored snapshot back
//! through [`FileEditor::replace_all`]. [`MemoryWorkspace`] is the minimal
//! in-memory editor the command line front-end persists between runs.

use crate::core::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

pub trait FileEditor {
    /// Current live files.
    fn snapshot(&self) -> Snapshot;

    /// Replace every live file with `files`.
    fn replace_all(&mut self, files: Snapshot);

    fn active_file(&self) -> Option<String>;

    fn set_active_file(&mut self, filename: Option<&str>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryWorkspace {
    pub files: Snapshot,
    #[serde(default)]
    pub active_file: Option<String>,
}

impl MemoryWorkspace {
    pub fn from_files(files: Snapshot) -> Self {
        let active_file = files.keys().next().cloned();
        Self { files, active_file }
    }

    pub fn write_file(&mut self, filename: &str, content: &str) {
        self.files.insert(filename.to_string(), content.to_string());
        self.active_file = Some(filename.to_string());
    }

    /// Remove a file; returns whether it existed.
    pub fn remove_file(&mut self, filename: &str) -> bool {
        let existed = self.files.remove(filename).is_some();
        if self.active_file.as_deref() == Some(filename) {
            self.active_file = self.files.keys().next().cloned();
        }
        existed
    }

    pub fn read_file(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }
}

impl FileEditor for MemoryWorkspace {
    fn snapshot(&self) -> Snapshot {
        self.files.clone()
    }

    fn replace_all(&mut self, files: Snapshot) {
        self.files = files;
    }

    fn active_file(&self) -> Option<String> {
        self.active_file.clone()
    }

    fn set_active_file(&mut self, filename: Option<&str>) {
        self.active_file = filename
            .filter(|name| self.files.contains_key(*name))
            .map(str::to_string);
    }
}
