//! UI helpers for stderr output.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print one task's completion time, marking the winner.
pub fn print_timing(label: &str, elapsed: &str, winner: bool) {
    let marker = if winner { " (winner)" } else { "" };
    if is_color_disabled() {
        eprintln!("  {label:<12} {elapsed:>12}{marker}");
    } else if winner {
        eprintln!(
            "  {:<12} {:>12}{}",
            style(label).bold(),
            elapsed,
            style(marker).green().bold()
        );
    } else {
        eprintln!("  {label:<12} {elapsed:>12}");
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
