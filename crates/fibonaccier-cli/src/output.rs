//! Report formatting.

use std::time::Duration;

use fibonaccier_orchestration::interfaces::RaceOutcome;

/// Format the one-line race report for an already checked outcome.
#[must_use]
pub fn format_report(n: u64, outcome: &RaceOutcome) -> String {
    format!(
        "fib({n}) -> {} ({} task finished first)",
        outcome.value, outcome.winner
    )
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
