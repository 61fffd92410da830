//! Constants for delays and process exit codes.

use std::time::Duration;

/// Default length of one delay unit. Every recursive call sleeps for a
/// uniformly drawn fraction of this.
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The two concurrent results did not match.
    pub const ERROR_MISMATCH: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unit_is_one_second() {
        assert_eq!(DEFAULT_TIME_UNIT, Duration::from_secs(1));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_MISMATCH,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
