//! # fibonaccier-core
//!
//! Core library for fibonaccier: a deliberately slow recursive Fibonacci
//! calculator that pauses for a random fraction of a time unit at every
//! call, plus the timed task wrapper raced by orchestration.

pub mod calculator;
pub mod constants;
pub mod delay;
pub mod options;
pub mod timed;

// Re-exports
pub use calculator::{Calculator, DelayedRecursive, FibError};
pub use constants::{exit_codes, DEFAULT_TIME_UNIT};
pub use delay::{ConstantDelay, Delay, UniformDelay};
pub use options::Options;
pub use timed::{timed_fibonacci, TimedResult};

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Compute F(n) iteratively, without delays.
///
/// Reference value for cross-checking the raced computations.
///
/// # Example
/// ```
/// assert_eq!(fibonaccier_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibonaccier_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}
