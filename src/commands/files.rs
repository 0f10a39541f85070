//! Editor stand-ins operating on the persisted live files.

use crate::core::{
    command_init::CommandContext,
    error::{Result, VirtualGitError},
    output::{write_hint, write_success},
};
use colored::*;
use std::io::Write;

pub fn execute_write(
    context: &mut CommandContext,
    filename: &str,
    content: &str,
    out: &mut impl Write,
) -> Result<()> {
    context.workspace.write_file(filename, content);
    context.save_workspace()?;
    write_success(out, &format!("Wrote {filename} ({} bytes)", content.len()))?;
    Ok(())
}

pub fn execute_rm(
    context: &mut CommandContext,
    filename: &str,
    out: &mut impl Write,
) -> Result<()> {
    if !context.workspace.remove_file(filename) {
        return Err(VirtualGitError::file_not_found(filename));
    }
    context.save_workspace()?;
    write_success(out, &format!("Removed {filename}"))?;
    Ok(())
}

/// Live files in name order; the active file is marked with `*`.
pub fn execute_ls(context: &CommandContext, out: &mut impl Write) -> Result<()> {
    let workspace = &context.workspace;
    if workspace.files.is_empty() {
        write_hint(out, "No files")?;
        return Ok(());
    }

    for (name, content) in &workspace.files {
        let size = format!("({} bytes)", content.len());
        if workspace.active_file.as_deref() == Some(name.as_str()) {
            writeln!(out, "* {} {}", name.cyan(), size.bright_black())?;
        } else {
            writeln!(out, "  {} {}", name, size.bright_black())?;
        }
    }
    Ok(())
}
