//! Unified color system for consistent terminal output.
//!
//! Every command colors file statuses, diff lines and graph lanes through this
//! module so the same change always renders the same way.
//!
//! # Public API
//! - [`get_status_color_style`]: Color function for a file status
//! - [`get_aligned_status`]: Colored, padded status label for listings
//! - [`get_colored_path`]: Apply status color to a filename
//! - [`get_line_color_style`]: Color function for a line-diff entry
//! - [`format_diff_line`]: Complete `+`/`-`/` ` line formatting
//! - [`get_lane_colored`]: Paint text with a graph lane's palette color
//!
//! # Color Scheme
//! - **Added**: Green for new files and added lines
//! - **Modified**: Yellow for changed files
//! - **Deleted**: Red for removed files and lines
//! - **Unchanged lines**: bright_black (muted)
//! - **Graph lanes**: truecolor from the lane palette

use crate::core::{file_status::FileStatus, line_diff::DiffLine, line_diff::LineKind};
use colored::*;

/// Label width used to align `status` listings.
const STATUS_LABEL_WIDTH: usize = 12;

/// Single function to apply color styling based on file status
pub fn get_status_color_style(status: FileStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        FileStatus::Added => Box::new(|text: &str| text.green()),
        FileStatus::Modified => Box::new(|text: &str| text.yellow()),
        FileStatus::Deleted => Box::new(|text: &str| text.red()),
    }
}

/// `new file:` / `modified:` / `deleted:` padded to a common width
pub fn get_aligned_status(status: FileStatus) -> ColoredString {
    let color_fn = get_status_color_style(status);
    let label = format!("{}:", status.description());
    color_fn(&format!("{label:<STATUS_LABEL_WIDTH$}"))
}

pub fn get_colored_path(status: FileStatus, path: &str) -> ColoredString {
    let color_fn = get_status_color_style(status);
    color_fn(path)
}

pub fn get_line_color_style(kind: LineKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        LineKind::Add => Box::new(|text: &str| text.green()),
        LineKind::Del => Box::new(|text: &str| text.red()),
        LineKind::Same => Box::new(|text: &str| text.bright_black()),
    }
}

/// Unified-diff style line: gutter character followed by the text
pub fn format_diff_line(line: &DiffLine) -> ColoredString {
    let color_fn = get_line_color_style(line.kind);
    color_fn(&format!("{}{}", line.kind.prefix(), line.text))
}

/// Paint `text` with a `#rrggbb` palette color; malformed colors leave it plain.
pub fn get_lane_colored(hex: &str, text: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::BRANCH_COLORS;

    #[test]
    fn test_aligned_status_labels() {
        let result = get_aligned_status(FileStatus::Added);
        assert!(result.to_string().contains("new file:   "));

        let result = get_aligned_status(FileStatus::Deleted);
        assert!(result.to_string().contains("deleted:    "));
    }

    #[test]
    fn test_format_diff_line_keeps_prefix() {
        let line = DiffLine::new(LineKind::Del, "old");
        assert!(format_diff_line(&line).to_string().contains("-old"));

        let line = DiffLine::new(LineKind::Same, "ctx");
        assert!(format_diff_line(&line).to_string().contains(" ctx"));
    }

    #[test]
    fn test_palette_parses() {
        for color in BRANCH_COLORS {
            assert!(parse_hex(color).is_some(), "{color}");
        }
        assert_eq!(parse_hex("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("orange"), None);
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn test_status_color_style_consistency() {
        for status in [FileStatus::Added, FileStatus::Modified, FileStatus::Deleted] {
            let color_fn = get_status_color_style(status);
            assert_eq!(color_fn("test").to_string(), color_fn("test").to_string());
            assert!(get_colored_path(status, "a.txt").to_string().contains("a.txt"));
        }
    }
}
