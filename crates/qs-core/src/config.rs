//! Fixed simulation constants and the `QueueConfig` bundle that carries them.
//!
//! The queue has no external configuration surface: every tunable is one of
//! the named constants below.  `QueueConfig::default()` collects them so the
//! simulation and driver read a single value instead of reaching for globals,
//! and tests can shrink the viewport or slow the animation without touching
//! the constants.

use std::time::Duration;

use crate::{QsError, QsResult, Viewport};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Lowest starting patience (inclusive).
pub const PATIENCE_MIN: i32 = 5;

/// Highest starting patience (inclusive).
pub const PATIENCE_MAX: i32 = 10;

/// Horizontal spacing between neighbouring queue slots, in pixels.
pub const SLOT_WIDTH: i32 = 80;

/// Left margin of slot 0 (the head of the line).
pub const BASE_OFFSET: i32 = 50;

/// Each animation frame covers `1 / INTERPOLATION_DIVISOR` of the remaining
/// horizontal distance.
pub const INTERPOLATION_DIVISOR: i32 = 50;

/// Vertical pixels an exiting client moves per animation frame.
pub const EXIT_VERTICAL_SPEED: i32 = 2;

/// How far past the right edge an exiting client is sent.
pub const EXIT_OVERSHOOT: i32 = 100;

/// How far above/below the viewport an exiting client may drift before it is
/// considered gone.
pub const EXIT_MARGIN: i32 = 50;

/// Chance that an abrupt-exit attempt actually removes the head of the line.
pub const ABRUPT_EXIT_PROBABILITY: f64 = 0.5;

/// Wall-time period between simulation steps while the driver is running.
pub const STEP_INTERVAL_MS: u64 = 1_500;

/// Wall-time period between animation frames.
pub const FRAME_INTERVAL_MS: u64 = 20;

pub const VIEWPORT_WIDTH: i32 = 900;
pub const VIEWPORT_HEIGHT: i32 = 400;

// ── QueueConfig ───────────────────────────────────────────────────────────────

/// All simulation tunables in one value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Inclusive lower bound of starting patience.
    pub patience_min: i32,
    /// Inclusive upper bound of starting patience.
    pub patience_max: i32,
    pub slot_width: i32,
    pub base_offset: i32,
    pub interpolation_divisor: i32,
    pub exit_vertical_speed: i32,
    pub exit_overshoot: i32,
    pub exit_margin: i32,
    pub abrupt_exit_probability: f64,
    pub step_interval_ms: u64,
    pub frame_interval_ms: u64,
    /// Current drawing area.  Changes at runtime via
    /// `QueueSim::set_viewport`.
    pub viewport: Viewport,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            patience_min:            PATIENCE_MIN,
            patience_max:            PATIENCE_MAX,
            slot_width:              SLOT_WIDTH,
            base_offset:             BASE_OFFSET,
            interpolation_divisor:   INTERPOLATION_DIVISOR,
            exit_vertical_speed:     EXIT_VERTICAL_SPEED,
            exit_overshoot:          EXIT_OVERSHOOT,
            exit_margin:             EXIT_MARGIN,
            abrupt_exit_probability: ABRUPT_EXIT_PROBABILITY,
            step_interval_ms:        STEP_INTERVAL_MS,
            frame_interval_ms:       FRAME_INTERVAL_MS,
            viewport:                Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        }
    }
}

impl QueueConfig {
    /// Check every field for values the simulation cannot run with.
    pub fn validate(&self) -> QsResult<()> {
        if self.patience_min > self.patience_max {
            return Err(QsError::Config(format!(
                "patience range {}..={} is empty",
                self.patience_min, self.patience_max
            )));
        }
        if self.slot_width <= 0 {
            return Err(QsError::Config(format!(
                "slot width must be positive, got {}",
                self.slot_width
            )));
        }
        if self.interpolation_divisor < 1 {
            return Err(QsError::Config(format!(
                "interpolation divisor must be at least 1, got {}",
                self.interpolation_divisor
            )));
        }
        if self.exit_vertical_speed < 0 {
            return Err(QsError::Config(format!(
                "exit vertical speed must not be negative, got {}",
                self.exit_vertical_speed
            )));
        }
        if !(0.0..=1.0).contains(&self.abrupt_exit_probability) {
            return Err(QsError::Config(format!(
                "abrupt exit probability {} is outside [0, 1]",
                self.abrupt_exit_probability
            )));
        }
        if self.exit_overshoot < 1 {
            return Err(QsError::Config(format!(
                "exit overshoot must be at least 1, got {}",
                self.exit_overshoot
            )));
        }
        if self.exit_margin < 0 {
            return Err(QsError::Config(format!(
                "exit margin must not be negative, got {}",
                self.exit_margin
            )));
        }
        if self.step_interval_ms == 0 || self.frame_interval_ms == 0 {
            return Err(QsError::Config("timer intervals must be non-zero".into()));
        }
        self.validate_viewport(self.viewport)
    }

    /// Reject viewports with no drawable area, or so large that the exit
    /// target or the lower off-screen threshold would not fit in `i32`.
    ///
    /// Assumes the other fields already passed [`validate`](Self::validate).
    pub fn validate_viewport(&self, viewport: Viewport) -> QsResult<()> {
        if viewport.width <= 0 || viewport.height <= 0 {
            return Err(QsError::Config(format!(
                "viewport must have positive size, got {}x{}",
                viewport.width, viewport.height
            )));
        }
        if viewport.width.checked_add(self.exit_overshoot).is_none()
            || viewport.height.checked_add(self.exit_margin).is_none()
        {
            return Err(QsError::Config(format!(
                "viewport {}x{} is too large",
                viewport.width, viewport.height
            )));
        }
        Ok(())
    }

    /// Slot target for the `slot`-th waiting client.
    #[inline]
    pub fn slot_x(&self, slot: usize) -> i32 {
        self.base_offset + slot as i32 * self.slot_width
    }

    /// Horizontal target handed to a client the moment it starts leaving.
    #[inline]
    pub fn exit_x(&self) -> i32 {
        self.viewport.width + self.exit_overshoot
    }

    /// Where a new arrival appears before sliding into its slot.
    #[inline]
    pub fn spawn_x(&self) -> i32 {
        self.viewport.width
    }

    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
