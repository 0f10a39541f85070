//! Engine configuration loaded from `config.json` in the data directory.
//!
//! A missing file yields [`EngineConfig::default`]; the file is never written
//! implicitly. Unknown keys are ignored and missing keys take their defaults.

use crate::core::{
    engine::CheckoutPolicy,
    error::{Result, VirtualGitError},
    state::DEFAULT_BRANCH,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Branch a fresh repository starts on; also the trunk lane of the graph.
    pub default_branch: String,
    pub log_limit: usize,
    pub diff_preview_lines: usize,
    pub refuse_dirty_checkout: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_branch: DEFAULT_BRANCH.to_string(),
            log_limit: 20,
            diff_preview_lines: 30,
            refuse_dirty_checkout: false,
        }
    }
}

impl EngineConfig {
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_file = dir.join(CONFIG_FILE);

        if !config_file.exists() {
            log::debug!("No config at {}, using defaults", config_file.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_file)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| VirtualGitError::config_parse_failed(&config_file, e))?;
        log::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }

    pub fn checkout_policy(&self) -> CheckoutPolicy {
        if self.refuse_dirty_checkout {
            CheckoutPolicy::RefuseDirty
        } else {
            CheckoutPolicy::DiscardUncommitted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults_without_writing() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config = EngineConfig::load_from(dir.path())?;

        assert_eq!(config, EngineConfig::default());
        assert!(!dir.path().join(CONFIG_FILE).exists());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "default_branch": "trunk", "refuse_dirty_checkout": true }"#,
        )?;

        let config = EngineConfig::load_from(dir.path())?;
        assert_eq!(config.default_branch, "trunk");
        assert_eq!(config.log_limit, 20);
        assert_eq!(config.checkout_policy(), CheckoutPolicy::RefuseDirty);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config = EngineConfig {
            log_limit: 5,
            ..EngineConfig::default()
        };
        config.save_to(dir.path())?;
        assert_eq!(EngineConfig::load_from(dir.path())?, config);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json")?;

        let err = EngineConfig::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, VirtualGitError::ConfigParseFailed { .. }));
        Ok(())
    }
}
