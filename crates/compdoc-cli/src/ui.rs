//! Status messages on stderr.
//!
//! stdout is reserved for the JSON document, so every message here is
//! written to stderr. `--quiet` silences everything except errors.

use console::style;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence success, info and warning messages.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether status messages are currently silenced.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message.
pub fn success(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", style("✓").green().bold(), message);
    }
}

/// Print an info message.
pub fn info(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", style("ℹ").blue().bold(), message);
    }
}

/// Print a warning message.
pub fn warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
    }
}

/// Print an error message. Shown even in quiet mode.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Configure colored output for status messages.
pub fn init_colors(no_color: bool) {
    console::set_colors_enabled_stderr(!no_color && should_use_color());
}

/// Format a module count for summaries.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
