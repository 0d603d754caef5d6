//! Animation phase tracking.

use embassy_time::{Duration, Instant};

/// Default animation cycle length.
pub const DEFAULT_CYCLE_MS: u64 = 2_000;

/// Converts wall time into the repeating phase fraction patterns consume.
#[derive(Debug, Clone, Copy)]
pub struct PhaseClock {
    cycle: Duration,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_CYCLE_MS))
    }
}

impl PhaseClock {
    pub const fn new(cycle: Duration) -> Self {
        Self { cycle }
    }

    pub const fn cycle(&self) -> Duration {
        self.cycle
    }

    /// Phase in `[0, 1)` for `now`, wrapping every cycle.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, now: Instant) -> f32 {
        let cycle_ms = self.cycle.as_millis().max(1);
        let progress_ms = now.as_millis() % cycle_ms;
        progress_ms as f32 / cycle_ms as f32
    }
}
