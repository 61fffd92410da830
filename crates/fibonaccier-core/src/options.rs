//! Race options and per-task delay construction.

use std::time::Duration;

use crate::constants::DEFAULT_TIME_UNIT;
use crate::delay::UniformDelay;

/// Options for a Fibonacci race.
#[derive(Debug, Clone)]
pub struct Options {
    /// Length of one delay unit.
    pub time_unit: Duration,
    /// Seed for reproducible delays; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            time_unit: DEFAULT_TIME_UNIT,
            seed: None,
        }
    }
}

impl Options {
    /// Build the delay source for the task at `task_index`.
    ///
    /// With a seed, task `i` is seeded with `seed + i` so the two tasks
    /// draw different but reproducible schedules.
    #[must_use]
    pub fn delay_for_task(&self, task_index: usize) -> UniformDelay {
        match self.seed {
            Some(seed) => {
                UniformDelay::seeded(self.time_unit, seed.wrapping_add(task_index as u64))
            }
            None => UniformDelay::new(self.time_unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::Delay;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.time_unit, DEFAULT_TIME_UNIT);
        assert!(opts.seed.is_none());
    }

    #[test]
    fn delay_uses_time_unit() {
        let opts = Options {
            time_unit: Duration::from_millis(5),
            seed: None,
        };
        let delay = opts.delay_for_task(0);
        assert_eq!(delay.unit(), Duration::from_millis(5));
        assert!(delay.next_delay() < Duration::from_millis(5));
    }

    #[test]
    fn seeded_tasks_are_reproducible_and_distinct() {
        let opts = Options {
            time_unit: Duration::from_secs(1),
            seed: Some(9),
        };
        let first: Vec<_> = {
            let d = opts.delay_for_task(0);
            (0..10).map(|_| d.next_delay()).collect()
        };
        let again: Vec<_> = {
            let d = opts.delay_for_task(0);
            (0..10).map(|_| d.next_delay()).collect()
        };
        let second: Vec<_> = {
            let d = opts.delay_for_task(1);
            (0..10).map(|_| d.next_delay()).collect()
        };
        assert_eq!(first, again);
        assert_ne!(first, second);
    }

    #[test]
    fn seed_wraps_instead_of_overflowing() {
        let opts = Options {
            time_unit: Duration::from_secs(1),
            seed: Some(u64::MAX),
        };
        let _ = opts.delay_for_task(1).next_delay();
    }
}
