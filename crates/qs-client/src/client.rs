//! The `Client` record.

use std::fmt;

use qs_core::{ClientId, Point};

use crate::{ClientView, Mood};

// ── ExitDirection ─────────────────────────────────────────────────────────────

/// Which way a leaving client drifts vertically while it slides off screen.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitDirection {
    /// Served and left politely.
    Up,
    /// Gave up or was turned away.
    Down,
}

impl ExitDirection {
    /// Sign of the per-frame `y` change (`y` grows downward).
    #[inline]
    pub fn vertical_sign(self) -> i32 {
        match self {
            ExitDirection::Up   => -1,
            ExitDirection::Down => 1,
        }
    }
}

impl fmt::Display for ExitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExitDirection::Up   => "up",
            ExitDirection::Down => "down",
        })
    }
}

// ── Client ────────────────────────────────────────────────────────────────────

/// One occupant of the queue.
///
/// The exit state is a one-way latch stored as `Option<ExitDirection>`:
/// `None` while waiting, `Some(dir)` from the moment the client starts
/// leaving.  [`begin_exit`](Self::begin_exit) is the only way to set it and
/// refuses to overwrite an existing direction, so an exiting client can
/// never return to the line or change course.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    id:       ClientId,
    patience: i32,
    position: Point,
    target_x: i32,
    exit:     Option<ExitDirection>,
}

impl Client {
    /// A waiting client at `position`, heading for `target_x`.
    pub fn new(id: ClientId, patience: i32, position: Point, target_x: i32) -> Self {
        Self { id, patience, position, target_x, exit: None }
    }

    #[inline]
    pub fn id(&self) -> ClientId {
        self.id
    }

    #[inline]
    pub fn patience(&self) -> i32 {
        self.patience
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn target_x(&self) -> i32 {
        self.target_x
    }

    #[inline]
    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }

    /// `Some` exactly when the client is exiting.
    #[inline]
    pub fn exit_direction(&self) -> Option<ExitDirection> {
        self.exit
    }

    /// Recomputed from `patience` on every call.
    #[inline]
    pub fn mood(&self) -> Mood {
        Mood::from_patience(self.patience)
    }

    /// `true` when the horizontal position has reached its target.
    #[inline]
    pub fn at_target(&self) -> bool {
        self.position.x == self.target_x
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    #[inline]
    pub fn decrement_patience(&mut self) {
        self.patience = self.patience.saturating_sub(1);
    }

    #[inline]
    pub fn clear_patience(&mut self) {
        self.patience = 0;
    }

    /// Flip the exit latch, sending the client toward `exit_x`.
    ///
    /// Returns `false` and changes nothing if the client is already exiting.
    pub fn begin_exit(&mut self, direction: ExitDirection, exit_x: i32) -> bool {
        if self.exit.is_some() {
            return false;
        }
        self.exit = Some(direction);
        self.target_x = exit_x;
        true
    }

    /// Point a waiting client at a new slot.
    ///
    /// Exiting clients keep their exit target; returns `false` for them.
    pub fn assign_slot(&mut self, slot_x: i32) -> bool {
        if self.exit.is_some() {
            return false;
        }
        self.target_x = slot_x;
        true
    }

    /// Shift the current position.
    #[inline]
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Read-only copy for renderers and observers.
    pub fn view(&self) -> ClientView {
        ClientView {
            id:       self.id,
            position: self.position,
            patience: self.patience,
            mood:     self.mood(),
            exit:     self.exit,
        }
    }
}
