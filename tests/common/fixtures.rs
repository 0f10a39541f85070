//! Predefined project scenarios

#![allow(dead_code)]

use super::repository::*;

/// Scenario: one commit on `main` with two files
pub fn create_project_with_initial_commit() -> anyhow::Result<TestProject> {
    let project = setup_test_project()?;

    write_file(&project, "index.html", "<h1>Hello</h1>")?;
    write_file(&project, "app.js", "console.log('hi')")?;
    commit(&project, "Initial commit")?;

    Ok(project)
}

/// Scenario: `feature` branched from the initial commit with one commit of its
/// own; `main` is checked out again afterwards
pub fn create_project_with_feature_branch() -> anyhow::Result<TestProject> {
    let project = create_project_with_initial_commit()?;

    project.run(&["checkout", "-b", "feature"])?;
    write_file(&project, "feature.txt", "new feature")?;
    write_file(&project, "app.js", "console.log('feature')")?;
    commit(&project, "Add feature")?;
    project.run(&["checkout", "main"])?;

    Ok(project)
}
