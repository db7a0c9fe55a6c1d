//! Status output and stream labels.
//!
//! Everything here writes to stderr: stdout is reserved for rewritten file
//! content so the tools stay pipe-friendly.

use std::path::Path;

use console::style;

/// Placeholder shown when input comes from standard input.
pub const STDIN_LABEL: &str = "<stdin>";
/// Placeholder shown when output goes to standard output.
pub const STDOUT_LABEL: &str = "<stdout>";

/// Print an informational status line.
pub fn info(msg: &str) {
    eprintln!("{msg}");
}

/// Print an error with the red `error:` prefix.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("error:").red(), msg);
}

/// Print a warning with the yellow `warning:` prefix.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("warning:").yellow(), msg);
}

/// Display name for the input side, `<stdin>` when no path was given.
#[must_use]
pub fn input_label(path: Option<&Path>) -> String {
    path.map_or_else(|| STDIN_LABEL.to_string(), |p| p.display().to_string())
}

/// Display name for the output side, `<stdout>` when no path was given.
#[must_use]
pub fn output_label(path: Option<&Path>) -> String {
    path.map_or_else(|| STDOUT_LABEL.to_string(), |p| p.display().to_string())
}
