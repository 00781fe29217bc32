//! Simulation time model.
//!
//! # Design
//!
//! The queue runs on two independent clocks:
//!
//! - [`Tick`] counts discrete simulation steps (one random queue event each).
//! - [`Frame`] counts animation frames (one interpolation pass each).
//!
//! Neither counter knows about wall time.  The mapping to real intervals is
//! held in [`QueueConfig`][crate::QueueConfig] and applied by whatever
//! drives the simulation.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of simulation steps taken so far.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Number of animation frames advanced so far.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
