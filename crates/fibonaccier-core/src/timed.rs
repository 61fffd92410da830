//! Completion-timestamped Fibonacci tasks.

use num_bigint::BigUint;
use tokio::time::Instant;

use crate::calculator::Calculator;

/// Value of one computation and the moment it became available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedResult {
    /// The computed F(n).
    pub value: BigUint,
    /// Monotonic timestamp taken right after the value resolved.
    pub completed_at: Instant,
}

/// Run `calc` for `n` to completion, then stamp the completion time.
pub async fn timed_fibonacci(calc: &dyn Calculator, n: u64) -> TimedResult {
    let value = calc.calculate(n).await;
    let completed_at = Instant::now();
    TimedResult {
        value,
        completed_at,
    }
}
