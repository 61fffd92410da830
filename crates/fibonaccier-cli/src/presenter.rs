//! CLI result presenter.

use fibonaccier_orchestration::interfaces::{RaceOutcome, ResultPresenter, TaskLabel};

use crate::output::{format_duration, format_report};
use crate::ui;

/// CLI result presenter.
///
/// The report goes to stdout; everything else goes to stderr so stdout
/// holds exactly one line.
pub struct CLIResultPresenter {
    verbose: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, n: u64, outcome: &RaceOutcome) {
        println!("{}", format_report(n, outcome));
        if self.verbose {
            self.present_timings(outcome);
        }
    }

    fn present_timings(&self, outcome: &RaceOutcome) {
        let timings = [
            (TaskLabel::First, outcome.first_elapsed),
            (TaskLabel::Second, outcome.second_elapsed),
        ];
        for (label, elapsed) in timings {
            ui::print_timing(
                &format!("{label} task"),
                &format_duration(elapsed),
                label == outcome.winner,
            );
        }
    }
}
