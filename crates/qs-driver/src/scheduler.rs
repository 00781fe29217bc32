//! Periodic timer handle with an explicit start/stop lifecycle.

use std::time::Duration;

/// Shortest period a [`Timer`] will run with.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// A periodic timer driven by caller-supplied elapsed time.
///
/// A stopped timer has no deadline.  [`start`](Self::start) arms it one full
/// interval out; [`stop`](Self::stop) disarms it.  Both are idempotent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    interval:  Duration,
    /// Time left until the next firing; `None` while stopped.
    remaining: Option<Duration>,
}

impl Timer {
    /// A stopped timer.  Intervals shorter than 1 ms are raised to 1 ms.
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.max(MIN_INTERVAL), remaining: None }
    }

    /// Arm the timer.  Returns `false` if it was already running, in which
    /// case its current deadline is kept.
    pub fn start(&mut self) -> bool {
        if self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(self.interval);
        true
    }

    /// Disarm the timer.  Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time until the next firing, or `None` while stopped.
    #[inline]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Let `elapsed` pass.  The deadline bottoms out at zero; call
    /// [`fire_if_due`](Self::fire_if_due) to consume it.
    pub fn elapse(&mut self, elapsed: Duration) {
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(elapsed);
        }
    }

    /// If the deadline has been reached, re-arm for the next period and
    /// return `true`.
    pub fn fire_if_due(&mut self) -> bool {
        match self.remaining {
            Some(r) if r.is_zero() => {
                self.remaining = Some(self.interval);
                true
            }
            _ => false,
        }
    }
}
