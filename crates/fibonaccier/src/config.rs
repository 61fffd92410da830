//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use fibonaccier_core::options::Options;

const LONG_ABOUT: &str = "\
NAME
    fibonaccier - redundant, concurrent Fibonacci number calculation

DESCRIPTION
    Computes the N-th Fibonacci number, where

        Fibonacci(0) = 0
        Fibonacci(1) = 1
        Fibonacci(n) = Fibonacci(n - 1) + Fibonacci(n - 2)

    N must be a positive integer. It is taken from the command line when
    given, otherwise one line is read from standard input.

    Two computations of Fibonacci(N) run concurrently on a single thread.
    Each uses the naive recursion above, without memoization, and every
    recursive call first sleeps for a random duration below one time unit.
    The delays compound, so large N is slow.

    The program prints the result and which of the two computations
    finished first. Ties are broken in favor of the second one.";

const AFTER_LONG_HELP: &str = "\
EXAMPLES
    fibonaccier 6
        fib(6) -> 8 (first task finished first)

    echo 6 | fibonaccier --time-unit 10ms
        fib(6) -> 8 (second task finished first)";

/// Race two delayed recursive Fibonacci computations.
#[derive(Parser, Debug)]
#[command(
    name = "fibonaccier",
    version,
    about,
    long_about = LONG_ABOUT,
    after_long_help = AFTER_LONG_HELP
)]
pub struct AppConfig {
    /// Index of the Fibonacci number to compute (read from stdin when omitted).
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Length of one delay unit (e.g. "1s", "10ms", "2m").
    #[arg(
        long,
        default_value = "1s",
        env = "FIBONACCIER_TIME_UNIT",
        value_parser = parse_time_unit
    )]
    pub time_unit: Duration,

    /// Seed for reproducible delays.
    #[arg(long, env = "FIBONACCIER_SEED")]
    pub seed: Option<u64>,

    /// Cross-check the result against an iterative computation.
    #[arg(long)]
    pub verify: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Race options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            time_unit: self.time_unit,
            seed: self.seed,
        }
    }
}

fn parse_time_unit(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {s:?}"))
}

/// Parse a duration string like "5m", "1h", "30s", "10ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
