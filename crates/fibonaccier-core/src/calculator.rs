//! Calculator trait, the delayed recursive calculator, and `FibError`.
//!
//! `Calculator` is the trait consumed by orchestration.
//! `DelayedRecursive` is the naive exponential recursion that suspends
//! before every call, leaf calls included, and never memoizes.

use futures_util::future::{BoxFuture, FutureExt};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::delay::Delay;

/// Error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// Bad argument count, non-integer input, or non-positive n.
    #[error("usage error: {0}")]
    Usage(String),

    /// Two computations of the same n returned different values.
    #[error("result mismatch: {first} != {second}")]
    Mismatch {
        /// Value of the first computation.
        first: BigUint,
        /// Value of the second computation.
        second: BigUint,
    },

    /// Reading input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl FibError {
    /// Whether this error is recovered at the top level by printing help.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Asynchronous Fibonacci calculator.
pub trait Calculator: Send + Sync {
    /// Compute F(n).
    fn calculate(&self, n: u64) -> BoxFuture<'_, BigUint>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Naive recursion with a pause drawn from `D` at every call.
pub struct DelayedRecursive<D> {
    delay: D,
}

impl<D: Delay> DelayedRecursive<D> {
    /// Create a calculator drawing its pauses from `delay`.
    #[must_use]
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    fn fib(&self, n: u64) -> BoxFuture<'_, BigUint> {
        async move {
            let pause = self.delay.next_delay();
            tracing::trace!(n, ?pause, "recursive call");
            tokio::time::sleep(pause).await;

            match n {
                0 => BigUint::zero(),
                1 => BigUint::one(),
                _ => {
                    // Sequential on purpose: each sub-call accrues its own delays.
                    let a = self.fib(n - 1).await;
                    let b = self.fib(n - 2).await;
                    a + b
                }
            }
        }
        .boxed()
    }
}

impl<D: Delay> Calculator for DelayedRecursive<D> {
    fn calculate(&self, n: u64) -> BoxFuture<'_, BigUint> {
        self.fib(n)
    }

    fn name(&self) -> &str {
        "DelayedRecursive"
    }
}
