use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicU64, Ordering},
};

use crate::foundation::error::{DriftError, DriftResult};

/// Nominal frame step: one tick per 60 Hz display refresh.
pub const DEFAULT_TICK_SECS: f64 = 1.0 / 60.0;

/// Anything that can report the current animation time in seconds.
///
/// Pattern instances read time through this trait so tests can substitute a fixed clock.
pub trait TimeSource: Send + Sync {
    /// Current time in seconds.
    fn now(&self) -> f64;
}

/// Process-wide monotonic animation clock, advanced a fixed step per rendered frame.
///
/// Stores the tick count rather than accumulated seconds, so `now()` after `n` ticks is
/// exactly `n as f64 * increment` with no summation drift. One writer calls [`tick`];
/// any number of readers call [`now`]. The writer publishes with a release store and
/// readers observe with acquire loads; no read-modify-write is involved.
///
/// [`tick`]: SharedClock::tick
/// [`now`]: TimeSource::now
#[derive(Debug)]
pub struct SharedClock {
    ticks: AtomicU64,
    increment: f64,
}

static GLOBAL: OnceLock<Arc<SharedClock>> = OnceLock::new();

impl SharedClock {
    /// A clock at zero advancing [`DEFAULT_TICK_SECS`] per tick.
    pub fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
            increment: DEFAULT_TICK_SECS,
        }
    }

    /// A clock at zero with a custom per-tick increment (seconds, finite and > 0).
    pub fn with_increment(increment: f64) -> DriftResult<Self> {
        if !increment.is_finite() || increment <= 0.0 {
            return Err(DriftError::invalid_parameter(
                "clock increment must be finite and > 0",
            ));
        }
        Ok(Self {
            ticks: AtomicU64::new(0),
            increment,
        })
    }

    /// The process-wide clock, created at zero on first use and never reset.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Advance by one frame. Must only be called from the single frame-driving thread.
    pub fn tick(&self) {
        let next = self.ticks.load(Ordering::Relaxed).saturating_add(1);
        self.ticks.store(next, Ordering::Release);
    }

    /// Number of ticks since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Seconds added per tick.
    pub fn increment(&self) -> f64 {
        self.increment
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SharedClock {
    fn now(&self) -> f64 {
        self.ticks() as f64 * self.increment
    }
}

/// A clock frozen at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock(pub f64);

impl TimeSource for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/shared.rs"]
mod tests;
