use crate::core::{
    colors::{get_aligned_status, get_colored_path},
    command_init::CommandContext,
    diff::{diff_working_tree, DiffSummary},
    error::Result,
    output::{write_hint, write_info, write_section_header},
    workspace::FileEditor,
};
use std::io::Write;

pub fn execute_status(context: &CommandContext, out: &mut impl Write) -> Result<()> {
    write_info(out, &format!("On branch {}", context.state.current_branch))?;

    if context.state.head.is_none() {
        write_hint(out, "No commits yet")?;
    }

    let diffs = diff_working_tree(&context.state, &context.workspace.snapshot());
    if diffs.is_empty() {
        writeln!(out, "nothing to commit, working tree clean")?;
        return Ok(());
    }

    writeln!(out)?;
    write_section_header(out, "Changes not staged for commit")?;
    for diff in &diffs {
        writeln!(
            out,
            "\t{}{}",
            get_aligned_status(diff.status),
            get_colored_path(diff.status, &diff.filename)
        )?;
    }
    writeln!(out)?;

    write_hint(out, &summary_line(&DiffSummary::of(&diffs)))?;
    Ok(())
}

/// `3 file(s) changed: 1 added, 1 modified, 1 deleted`
pub fn summary_line(summary: &DiffSummary) -> String {
    format!(
        "{} file(s) changed: {} added, {} modified, {} deleted",
        summary.total(),
        summary.added,
        summary.modified,
        summary.deleted
    )
}
