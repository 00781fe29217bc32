//! Plain data row handed to renderers.

use qs_core::{ClientId, Point};

use crate::{ExitDirection, Mood};

/// Snapshot of one client, detached from the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientView {
    pub id:       ClientId,
    pub position: Point,
    pub patience: i32,
    pub mood:     Mood,
    /// `Some` once the client has started leaving.
    pub exit:     Option<ExitDirection>,
}

impl ClientView {
    #[inline]
    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }
}
