use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{fixtures::*, repository::*};

#[cfg(test)]
mod diff_command_tests {
    use super::*;

    #[test]
    fn test_diff_is_empty_after_commit() -> anyhow::Result<()> {
        let project = create_project_with_initial_commit()?;

        project
            .cmd()?
            .arg("diff")
            .assert()
            .success()
            .stdout(predicate::str::contains("No changes"))
            .stdout(predicate::str::contains("diff --git").not());

        Ok(())
    }

    #[test]
    fn test_diff_shows_line_changes() -> anyhow::Result<()> {
        let project = setup_test_project()?;
        write_file(&project, "notes.txt", "one\ntwo\nthree")?;
        commit(&project, "notes")?;
        write_file(&project, "notes.txt", "one\n2\nthree")?;

        project
            .cmd()?
            .arg("diff")
            .assert()
            .success()
            .stdout(predicate::str::contains("diff --git a/notes.txt b/notes.txt"))
            .stdout(predicate::str::contains("--- a/notes.txt"))
            .stdout(predicate::str::contains("+++ b/notes.txt"))
            .stdout(predicate::str::contains("-two"))
            .stdout(predicate::str::contains("+2"))
            .stdout(predicate::str::contains(" one"));

        Ok(())
    }

    #[test]
    fn test_diff_for_new_and_deleted_files() -> anyhow::Result<()> {
        let project = create_project_with_initial_commit()?;
        write_file(&project, "new.txt", "fresh")?;
        project.run(&["rm", "index.html"])?;

        project
            .cmd()?
            .arg("diff")
            .assert()
            .success()
            .stdout(predicate::str::contains("--- /dev/null"))
            .stdout(predicate::str::contains("+fresh"))
            .stdout(predicate::str::contains("+++ /dev/null"))
            .stdout(predicate::str::contains("-<h1>Hello</h1>"));

        Ok(())
    }

    #[test]
    fn test_diff_preview_is_capped() -> anyhow::Result<()> {
        let project = setup_test_project()?;
        let content: Vec<String> = (0..45).map(|i| format!("line {i}")).collect();
        write_file(&project, "big.txt", &content.join("\n"))?;

        project
            .cmd()?
            .arg("diff")
            .assert()
            .success()
            .stdout(predicate::str::contains("+line 29"))
            .stdout(predicate::str::contains("+line 30").not())
            .stdout(predicate::str::contains("... (15 more lines)"));

        Ok(())
    }
}
