//! Queue events and the transitions they plan.

use std::fmt;

use qs_client::{Client, ExitDirection};
use qs_core::SimRng;

/// One discrete thing that happens to the queue during a step.
///
/// Every random choice is made when the event is drawn, so planning an event
/// against a queue is deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QueueEvent {
    /// The head of the line is served and leaves upward.
    PoliteExit,

    /// The head of the line storms off downward, patience zeroed, but only
    /// when `succeeded` (the coin flip) is `true`.  A failed attempt changes
    /// nothing.
    AbruptExitAttempt { succeeded: bool },

    /// Everyone loses one point of patience; anyone who runs out leaves
    /// downward.
    PatienceDecay,
}

impl QueueEvent {
    /// Draw an event uniformly from the three kinds.
    ///
    /// The abrupt-exit coin is flipped as part of the draw, before anything
    /// about the queue is inspected.
    pub fn draw(rng: &mut SimRng, abrupt_exit_probability: f64) -> QueueEvent {
        match rng.gen_range(0..3u8) {
            0 => QueueEvent::PoliteExit,
            1 => QueueEvent::AbruptExitAttempt {
                succeeded: rng.gen_bool(abrupt_exit_probability),
            },
            _ => QueueEvent::PatienceDecay,
        }
    }

    /// Work out what this event does to `clients` without touching them.
    ///
    /// Transitions refer to clients by their index in `clients` and must be
    /// applied in the returned order.  An empty queue plans nothing.
    pub fn plan(self, clients: &[Client]) -> Vec<Transition> {
        let Some(head) = clients.first() else {
            return vec![];
        };

        match self {
            QueueEvent::PoliteExit => {
                if head.is_exiting() {
                    vec![]
                } else {
                    vec![Transition::BeginExit { index: 0, direction: ExitDirection::Up }]
                }
            }

            QueueEvent::AbruptExitAttempt { succeeded } => {
                if !succeeded || head.is_exiting() {
                    vec![]
                } else {
                    vec![
                        Transition::ClearPatience { index: 0 },
                        Transition::BeginExit { index: 0, direction: ExitDirection::Down },
                    ]
                }
            }

            QueueEvent::PatienceDecay => {
                let mut out = Vec::with_capacity(clients.len());
                for (index, c) in clients.iter().enumerate() {
                    out.push(Transition::DecayPatience { index });
                    if c.patience().saturating_sub(1) <= 0 && !c.is_exiting() {
                        out.push(Transition::BeginExit { index, direction: ExitDirection::Down });
                    }
                }
                out
            }
        }
    }
}

impl fmt::Display for QueueEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueEvent::PoliteExit => f.write_str("polite exit"),
            QueueEvent::AbruptExitAttempt { succeeded: true } => f.write_str("abrupt exit"),
            QueueEvent::AbruptExitAttempt { succeeded: false } => {
                f.write_str("abrupt exit (coin failed)")
            }
            QueueEvent::PatienceDecay => f.write_str("patience decay"),
        }
    }
}

/// A single state change planned by a [`QueueEvent`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    DecayPatience { index: usize },
    ClearPatience { index: usize },
    /// Latch the client's exit and send it past the right edge.
    BeginExit { index: usize, direction: ExitDirection },
}
