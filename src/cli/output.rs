//! Styled status lines for the terminal.
//!
//! Every command reports through these helpers so status output looks
//! the same everywhere. Failures and warnings go to stderr; decrypted
//! entry JSON never passes through here and stays pipeable on stdout.

use console::style;

/// Green check for a completed action.
pub fn success(msg: &str) {
    println!("{} {msg}", style("✓").green().bold());
}

/// Red cross on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {msg}", style("✗").red().bold());
}

/// Yellow warning on stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {msg}", style("⚠").yellow().bold());
}

/// Blue informational note.
pub fn info(msg: &str) {
    println!("{} {msg}", style("ℹ").blue().bold());
}

/// Dimmed follow-up hint.
pub fn tip(msg: &str) {
    println!("{} {}", style("→").dim(), style(msg).dim());
}
