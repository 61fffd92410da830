//! Core orchestration: concurrent execution and result analysis.

use tokio::time::Instant;
use tracing::Instrument;

use fibonaccier_core::calculator::{Calculator, DelayedRecursive, FibError};
use fibonaccier_core::options::Options;
use fibonaccier_core::timed::timed_fibonacci;

use crate::interfaces::{RaceOutcome, ResultPair, TaskLabel};

/// Race two fresh delayed calculators for `n`, built from `opts`.
pub async fn execute_race(opts: &Options, n: u64) -> ResultPair {
    let first = DelayedRecursive::new(opts.delay_for_task(0));
    let second = DelayedRecursive::new(opts.delay_for_task(1));
    run_concurrently(&first, &second, n).await
}

/// Run both calculators for `n` concurrently and wait for both.
///
/// The two futures are polled on the calling task, so they interleave only
/// at their suspension points. The pair comes back in launch order no
/// matter which finished first.
pub async fn run_concurrently(
    first: &dyn Calculator,
    second: &dyn Calculator,
    n: u64,
) -> ResultPair {
    let started_at = Instant::now();
    tracing::debug!(n, first = first.name(), second = second.name(), "launching tasks");

    let (first, second) = tokio::join!(
        timed_fibonacci(first, n).instrument(tracing::debug_span!("task", label = "first")),
        timed_fibonacci(second, n).instrument(tracing::debug_span!("task", label = "second")),
    );

    tracing::debug!(
        first = ?first.completed_at.duration_since(started_at),
        second = ?second.completed_at.duration_since(started_at),
        "both tasks complete"
    );

    ResultPair {
        started_at,
        first,
        second,
    }
}

/// Decide the first finisher. Only a strictly earlier first timestamp
/// wins for the first task; equality goes to the second.
pub fn first_finisher(first: Instant, second: Instant) -> TaskLabel {
    if first < second {
        TaskLabel::First
    } else {
        TaskLabel::Second
    }
}

/// Check that both tasks agree, then resolve the winner.
pub fn analyze_race_results(pair: &ResultPair) -> Result<RaceOutcome, FibError> {
    if pair.first.value != pair.second.value {
        return Err(FibError::Mismatch {
            first: pair.first.value.clone(),
            second: pair.second.value.clone(),
        });
    }

    Ok(RaceOutcome {
        value: pair.first.value.clone(),
        winner: first_finisher(pair.first.completed_at, pair.second.completed_at),
        first_elapsed: pair.first.completed_at.duration_since(pair.started_at),
        second_elapsed: pair.second.completed_at.duration_since(pair.started_at),
    })
}

/// Compare the raced value with the iterative reference.
pub fn cross_check(n: u64, outcome: &RaceOutcome) -> Result<(), FibError> {
    let expected = fibonaccier_core::fibonacci(n);
    if outcome.value != expected {
        return Err(FibError::Mismatch {
            first: outcome.value.clone(),
            second: expected,
        });
    }
    Ok(())
}
