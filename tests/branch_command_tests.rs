use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod branch_command_tests {
    use super::*;

    #[test]
    fn test_branch_lists_with_current_marker() -> anyhow::Result<()> {
        let project = create_project_with_feature_branch()?;

        project
            .cmd()?
            .arg("branch")
            .assert()
            .success()
            .stdout(predicate::str::contains("* main"))
            .stdout(predicate::str::contains("  feature"));

        Ok(())
    }

    #[test]
    fn test_branch_creates_without_switching() -> anyhow::Result<()> {
        let project = create_project_with_initial_commit()?;

        project
            .cmd()?
            .args(["branch", "experiment"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created branch 'experiment'"));

        project
            .cmd()?
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::on_branch("main"));

        Ok(())
    }

    #[test]
    fn test_duplicate_branch_is_rejected() -> anyhow::Result<()> {
        let project = create_project_with_initial_commit()?;
        project.run(&["branch", "experiment"])?;

        project
            .cmd()?
            .args(["branch", "experiment"])
            .assert()
            .failure()
            .stdout(assertions::has_error(
                "a branch named 'experiment' already exists",
            ));

        let listing = project.run(&["branch"])?;
        assert_eq!(listing.lines().count(), 2);

        Ok(())
    }
}
