//! # fibonaccier-orchestration
//!
//! Concurrent racing of two identical computations and result analysis.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{RaceOutcome, ResultPair, ResultPresenter, TaskLabel};
pub use orchestrator::{analyze_race_results, cross_check, execute_race, run_concurrently};
