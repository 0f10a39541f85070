use crate::core::{
    command_init::CommandContext, engine::get_commit_log, error::Result, output::write_hint,
    state::Commit,
};
use colored::*;
use std::io::Write;

pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

pub fn execute_log(
    context: &CommandContext,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let limit = limit.unwrap_or(context.config.log_limit);
    let commits = get_commit_log(&context.state, Some(limit));

    if commits.is_empty() {
        write_hint(
            out,
            &format!(
                "your current branch '{}' does not have any commits yet",
                context.state.current_branch
            ),
        )?;
        return Ok(());
    }

    for commit in commits {
        write_commit_header(out, commit)?;
    }
    Ok(())
}

/// `commit`, `Date:` and indented message block, as `git log` prints it.
pub fn write_commit_header(out: &mut impl Write, commit: &Commit) -> Result<()> {
    writeln!(out, "{}", format!("commit {}", commit.id).yellow())?;
    writeln!(out, "Date:   {}", commit.timestamp.format(DATE_FORMAT))?;
    writeln!(out)?;
    writeln!(out, "    {}", commit.message)?;
    writeln!(out)?;
    Ok(())
}
