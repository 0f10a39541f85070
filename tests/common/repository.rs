//! Project setup and command helpers
//!
//! Every test project lives in its own temporary data directory, passed to the
//! binary through `--home`, so tests never touch the real per-user store.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const BIN: &str = "virtual-git";

/// Test project: the temporary data directory must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestProject {
    pub temp_dir: TempDir,
    pub home: PathBuf,
    pub project: String,
}

impl TestProject {
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `virtual-git --home <tmp> --project <name>` ready for a subcommand
    pub fn cmd(&self) -> anyhow::Result<Command> {
        self.cmd_for(&self.project)
    }

    /// Same data directory, another project
    pub fn cmd_for(&self, project: &str) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin(BIN)?;
        cmd.arg("--home")
            .arg(&self.home)
            .arg("--project")
            .arg(project)
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    /// Run a subcommand that must succeed and return its stdout
    pub fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = self.cmd()?.args(args).assert().success().get_output().clone();
        Ok(String::from_utf8(output.stdout)?)
    }
}

pub fn setup_test_project() -> anyhow::Result<TestProject> {
    let temp_dir = TempDir::new()?;
    let home = temp_dir.path().to_path_buf();

    Ok(TestProject {
        temp_dir,
        home,
        project: "site".to_string(),
    })
}

pub fn write_file(project: &TestProject, filename: &str, content: &str) -> anyhow::Result<()> {
    project.run(&["write", filename, content])?;
    Ok(())
}

pub fn commit(project: &TestProject, message: &str) -> anyhow::Result<String> {
    project.run(&["commit", "-m", message])
}

/// Id of the newest commit, read back through `log -n 1`
pub fn head_id(project: &TestProject) -> anyhow::Result<String> {
    let log = project.run(&["log", "-n", "1"])?;
    let id = log
        .lines()
        .find_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no commits in log output"))?;
    Ok(id)
}
