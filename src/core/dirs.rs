use crate::core::error::{Result, VirtualGitError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "virtual-git";

/// Per-user directory holding `config.json` and the project store.
pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local/share"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::data_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(VirtualGitError::DataDirectoryNotFound)
}

/// `--home` when given, the per-user data directory otherwise.
pub fn resolve_data_directory(home: Option<&Path>) -> Result<PathBuf> {
    match home {
        Some(dir) => Ok(dir.to_path_buf()),
        None => get_data_directory(),
    }
}
