//! Delay sources injected into every recursive call.
//!
//! `UniformDelay` draws from `[0, unit)` and is what the binary uses.
//! `ConstantDelay` always returns the same pause and exists so tests can
//! build deterministic schedules (including exact completion ties).

use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-call pauses.
pub trait Delay: Send + Sync {
    /// Duration to suspend before the next call does any work.
    fn next_delay(&self) -> Duration;
}

/// Uniformly random pause in `[0, unit)`.
///
/// The tokio timer ticks in milliseconds, so with a unit near 1ms every
/// nonzero draw sleeps for about one tick and the draws stop mattering.
pub struct UniformDelay {
    unit: Duration,
    rng: Mutex<StdRng>,
}

impl UniformDelay {
    /// Create a delay source seeded from OS entropy.
    #[must_use]
    pub fn new(unit: Duration) -> Self {
        Self {
            unit,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a reproducible delay source.
    #[must_use]
    pub fn seeded(unit: Duration, seed: u64) -> Self {
        Self {
            unit,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Length of one delay unit.
    #[must_use]
    pub fn unit(&self) -> Duration {
        self.unit
    }
}

impl Delay for UniformDelay {
    fn next_delay(&self) -> Duration {
        let fraction: f64 = self.rng.lock().gen();
        // Float rounding may land on `unit`; the interval is half-open.
        let upper = self.unit.saturating_sub(Duration::from_nanos(1));
        self.unit.mul_f64(fraction).min(upper)
    }
}

/// Fixed pause, zero by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantDelay(pub Duration);

impl Delay for ConstantDelay {
    fn next_delay(&self) -> Duration {
        self.0
    }
}
