//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Commands write through these helpers into any [`Write`] sink so the same
//! code drives the terminal and the tests.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for headers
//! - **Muted hints**: bright_black for secondary information
//! - **Plain text first**: the message is always contiguous, color only wraps it

use colored::*;
use std::io::{self, Write};

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// `✓ <message>`
pub fn write_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green(), message.white())
}

pub fn write_info(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.white())
}

/// `<header>:` followed by a blank line
pub fn write_section_header(out: &mut impl Write, header: &str) -> io::Result<()> {
    writeln!(out, "{}\n", format!("{header}:").blue())
}

pub fn write_hint(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.bright_black())
}
