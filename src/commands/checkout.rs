use crate::core::{
    command_init::CommandContext,
    engine::{checkout, create_branch},
    error::{Result, VirtualGitError},
    output::write_success,
};
use std::io::Write;

/// Switch to `name` and restore its files, creating the branch first with `-b`.
pub fn execute_checkout(
    context: &mut CommandContext,
    create: bool,
    name: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let name = name.ok_or(VirtualGitError::MissingBranchName)?;

    // With -b nothing is stored unless the switch succeeds too.
    let base = if create {
        create_branch(&context.state, name).into_result()?
    } else {
        context.state.clone()
    };

    let policy = context.config.checkout_policy();
    let outcome = checkout(&base, name, &mut context.workspace, policy);
    context.apply(outcome)?;
    context.save_workspace()?;

    log::debug!(
        "Checked out '{}' with {} live file(s)",
        name,
        context.workspace.files.len()
    );

    if create {
        write_success(out, &format!("Switched to new branch '{name}'"))?;
    } else {
        write_success(out, &format!("Switched to branch '{name}'"))?;
    }
    Ok(())
}
