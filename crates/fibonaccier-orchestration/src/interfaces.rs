//! Orchestration interfaces.

use std::fmt;
use std::time::Duration;

use num_bigint::BigUint;
use tokio::time::Instant;

use fibonaccier_core::timed::TimedResult;

/// Trait for presenting race results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the one-line report for a finished race.
    fn present_report(&self, n: u64, outcome: &RaceOutcome);

    /// Present per-task timings.
    fn present_timings(&self, outcome: &RaceOutcome);
}

/// Which of the two tasks a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskLabel {
    /// The task launched first.
    First,
    /// The task launched second.
    Second,
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Results of both tasks, always in launch order.
#[derive(Debug, Clone)]
pub struct ResultPair {
    /// When both tasks were launched.
    pub started_at: Instant,
    /// Result of the first task.
    pub first: TimedResult,
    /// Result of the second task.
    pub second: TimedResult,
}

/// Analysed race: the agreed value and who got there first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceOutcome {
    /// F(n), identical for both tasks.
    pub value: BigUint,
    /// First finisher, ties going to the second task.
    pub winner: TaskLabel,
    /// Time from launch until the first task completed.
    pub first_elapsed: Duration,
    /// Time from launch until the second task completed.
    pub second_elapsed: Duration,
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_report(&self, _n: u64, _outcome: &RaceOutcome) {}
    fn present_timings(&self, _outcome: &RaceOutcome) {}
}
