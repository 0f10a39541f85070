use crate::commands::{commit_log::write_commit_header, diff::write_file_diff, status::summary_line};
use crate::core::{
    command_init::CommandContext,
    diff::{diff_commit_with_parent, DiffSummary},
    error::{Rejection, Result},
    output::write_hint,
};
use std::io::Write;

/// One commit's header followed by its diff against the parent.
pub fn execute_show(context: &CommandContext, id: &str, out: &mut impl Write) -> Result<()> {
    let commit = context
        .state
        .find_commit(id)
        .ok_or_else(|| Rejection::unknown_commit(id))?;
    let diffs = diff_commit_with_parent(&context.state, id)?;

    write_commit_header(out, commit)?;
    for diff in &diffs {
        write_file_diff(out, diff, context.config.diff_preview_lines)?;
    }
    write_hint(out, &summary_line(&DiffSummary::of(&diffs)))?;
    Ok(())
}
