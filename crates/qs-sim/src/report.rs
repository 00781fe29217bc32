//! Per-call summaries returned by `step` and `advance_animation`.

use qs_core::{ClientId, Frame, Tick};

use crate::QueueEvent;

/// What one [`QueueSim::step`][crate::QueueSim::step] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The tick this step ran as.
    pub tick:   Tick,
    /// `None` when the queue was empty and nothing was drawn.
    pub event:  Option<QueueEvent>,
    /// Clients whose exit latch flipped during this step.
    pub exited: Vec<ClientId>,
}

/// What one [`QueueSim::advance_animation`][crate::QueueSim::advance_animation]
/// did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub frame:   Frame,
    /// Number of clients whose position changed.
    pub moved:   usize,
    /// Clients that left the viewport and were dropped, in queue order.
    pub removed: Vec<ClientId>,
}

impl FrameReport {
    /// `true` if anything visible changed and a redraw is worthwhile.
    #[inline]
    pub fn changed(&self) -> bool {
        self.moved > 0 || !self.removed.is_empty()
    }
}
