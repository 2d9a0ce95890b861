//! Terminal output for long-running commands: Cargo-style status lines on
//! stderr and a spinner for page fetching and image inspection.

use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

fn status_line(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{:>12} {message}", style.apply_to(label));
}

/// Print a Cargo-style status line: `      Locked 42 packages to dependencies.R`
///
/// The `label` is right-aligned to 12 columns in bold green.
pub fn status(label: &str, message: &str) {
    status_line(Style::new().green().bold(), label, message);
}

/// Print a status line with a bold yellow label, for problems that do not stop the run.
pub fn status_warn(label: &str, message: &str) {
    status_line(Style::new().yellow().bold(), label, message);
}

/// Start a steadily ticking spinner. Call [`ProgressBar::finish_and_clear`]
/// before printing a status line so the two do not interleave.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
