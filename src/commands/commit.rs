use crate::core::{
    command_init::CommandContext,
    engine::create_commit,
    error::{Result, VirtualGitError},
    workspace::FileEditor,
};
use colored::*;
use std::io::Write;

/// Snapshot the live files onto the current branch.
///
/// The message is trimmed; a missing or blank message is refused before the
/// engine sees it.
pub fn execute_commit(
    context: &mut CommandContext,
    message: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let message = message.ok_or(VirtualGitError::MissingMessage)?.trim();
    if message.is_empty() {
        return Err(VirtualGitError::EmptyMessage);
    }

    let files = context.workspace.snapshot();
    let file_count = files.len();
    let outcome = create_commit(&context.state, message, files);
    context.apply(outcome)?;

    let id = context.state.head.as_deref().unwrap_or_default();
    writeln!(
        out,
        "[{} {}] {}",
        context.state.current_branch,
        id.yellow(),
        message
    )?;
    writeln!(out, " {file_count} file(s) snapshot")?;
    Ok(())
}
