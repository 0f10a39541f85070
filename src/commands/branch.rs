use crate::core::{
    command_init::CommandContext, engine::create_branch, error::Result, output::write_success,
};
use colored::*;
use std::io::Write;

/// List branches, or create `name` at `HEAD` without switching to it.
pub fn execute_branch(
    context: &mut CommandContext,
    name: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    match name {
        Some(name) => {
            let outcome = create_branch(&context.state, name);
            context.apply(outcome)?;
            write_success(out, &format!("Created branch '{name}'"))?;
        }
        None => list_branches(context, out)?,
    }
    Ok(())
}

fn list_branches(context: &CommandContext, out: &mut impl Write) -> Result<()> {
    for branch in &context.state.branches {
        if branch.name == context.state.current_branch {
            writeln!(out, "* {}", branch.name.green())?;
        } else {
            writeln!(out, "  {}", branch.name)?;
        }
    }
    Ok(())
}
