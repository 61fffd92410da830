//! Property-based tests for the delayed recursive calculator.
//!
//! Delays only move completion times around; the value must always match
//! the iterative reference.

use std::time::Duration;

use num_bigint::BigUint;
use proptest::prelude::*;

use fibonaccier_core::calculator::{Calculator, DelayedRecursive};
use fibonaccier_core::delay::{ConstantDelay, UniformDelay};
use fibonaccier_core::fibonacci;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

fn compute_delayed(n: u64, seed: u64) -> BigUint {
    let calc = DelayedRecursive::new(UniformDelay::seeded(Duration::from_millis(10), seed));
    runtime().block_on(calc.calculate(n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// For random n in [0..=15] and any delay schedule, the value is F(n).
    #[test]
    fn matches_reference(n in 0u64..=15, seed in any::<u64>()) {
        prop_assert_eq!(compute_delayed(n, seed), fibonacci(n), "n={}", n);
    }

    /// Two runs of the same n agree, whatever their delay draws.
    #[test]
    fn repeated_runs_agree(n in 0u64..=12, seed_a in any::<u64>(), seed_b in any::<u64>()) {
        prop_assert_eq!(compute_delayed(n, seed_a), compute_delayed(n, seed_b));
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn addition_property(n in 0u64..=12) {
        let calc = DelayedRecursive::new(ConstantDelay::default());
        let rt = runtime();
        let fn_val = rt.block_on(calc.calculate(n));
        let fn1_val = rt.block_on(calc.calculate(n + 1));
        let fn2_val = rt.block_on(calc.calculate(n + 2));
        prop_assert_eq!(&fn_val + &fn1_val, fn2_val, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }
}

#[test]
fn first_twenty_one_values() {
    let calc = DelayedRecursive::new(ConstantDelay::default());
    let rt = runtime();
    let expected: [u32; 21] = [
        0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765,
    ];
    for (n, want) in expected.iter().enumerate() {
        let got = rt.block_on(calc.calculate(n as u64));
        assert_eq!(got, BigUint::from(*want), "n={n}");
    }
}
