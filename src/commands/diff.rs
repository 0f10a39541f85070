use crate::commands::status::summary_line;
use crate::core::{
    colors::format_diff_line,
    command_init::CommandContext,
    diff::{diff_working_tree, DiffSummary, FileDiff},
    error::Result,
    file_status::FileStatus,
    line_diff::{diff_lines, DiffLine, LineKind},
    output::write_hint,
    workspace::FileEditor,
};
use colored::*;
use std::io::Write;

/// Working-tree diff against `HEAD`, one block per changed file.
pub fn execute_diff(context: &CommandContext, out: &mut impl Write) -> Result<()> {
    let diffs = diff_working_tree(&context.state, &context.workspace.snapshot());
    if diffs.is_empty() {
        write_hint(out, "No changes")?;
        return Ok(());
    }

    for diff in &diffs {
        write_file_diff(out, diff, context.config.diff_preview_lines)?;
    }
    write_hint(out, &summary_line(&DiffSummary::of(&diffs)))?;
    Ok(())
}

/// Headers plus at most `preview` body lines for one file.
///
/// Added and deleted files list their content; modified files show the
/// line-level diff of both versions.
pub fn write_file_diff(out: &mut impl Write, diff: &FileDiff, preview: usize) -> Result<()> {
    let name = &diff.filename;
    writeln!(out, "{}", format!("diff --git a/{name} b/{name}").bold())?;

    let (old_header, new_header, body) = match diff.status {
        FileStatus::Added => (
            "--- /dev/null".to_string(),
            format!("+++ b/{name}"),
            content_lines(&diff.new_content, LineKind::Add),
        ),
        FileStatus::Deleted => (
            format!("--- a/{name}"),
            "+++ /dev/null".to_string(),
            content_lines(&diff.old_content, LineKind::Del),
        ),
        FileStatus::Modified => (
            format!("--- a/{name}"),
            format!("+++ b/{name}"),
            diff_lines(&diff.old_content, &diff.new_content),
        ),
    };
    writeln!(out, "{}", old_header.bold())?;
    writeln!(out, "{}", new_header.bold())?;

    for line in body.iter().take(preview) {
        writeln!(out, "{}", format_diff_line(line))?;
    }
    if body.len() > preview {
        write_hint(out, &format!("... ({} more lines)", body.len() - preview))?;
    }
    writeln!(out)?;
    Ok(())
}

fn content_lines(content: &str, kind: LineKind) -> Vec<DiffLine> {
    content
        .split('\n')
        .map(|line| DiffLine::new(kind, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(diff: &FileDiff, preview: usize) -> String {
        let mut out = Vec::new();
        write_file_diff(&mut out, diff, preview).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn file_diff(status: FileStatus, old: &str, new: &str) -> FileDiff {
        FileDiff {
            filename: "app.js".to_string(),
            status,
            old_content: old.to_string(),
            new_content: new.to_string(),
        }
    }

    #[test]
    fn test_added_file_headers() {
        let text = render(&file_diff(FileStatus::Added, "", "a\nb"), 30);
        assert!(text.contains("diff --git a/app.js b/app.js"));
        assert!(text.contains("--- /dev/null"));
        assert!(text.contains("+++ b/app.js"));
        assert!(text.contains("+a"));
        assert!(text.contains("+b"));
    }

    #[test]
    fn test_deleted_file_headers() {
        let text = render(&file_diff(FileStatus::Deleted, "gone", ""), 30);
        assert!(text.contains("--- a/app.js"));
        assert!(text.contains("+++ /dev/null"));
        assert!(text.contains("-gone"));
    }

    #[test]
    fn test_modified_file_shows_line_diff() {
        let text = render(&file_diff(FileStatus::Modified, "a\nb", "a\nc"), 30);
        assert!(text.contains(" a"));
        assert!(text.contains("-b"));
        assert!(text.contains("+c"));
    }

    #[test]
    fn test_preview_is_capped() {
        let content: Vec<String> = (0..40).map(|i| format!("line {i}")).collect();
        let text = render(&file_diff(FileStatus::Added, "", &content.join("\n")), 30);
        assert!(text.contains("+line 29"));
        assert!(!text.contains("+line 30"));
        assert!(text.contains("... (10 more lines)"));
    }
}
