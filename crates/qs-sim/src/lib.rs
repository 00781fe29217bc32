//! `qs-sim` — the queue simulation.
//!
//! # Two update paths
//!
//! ```text
//! step()               one discrete queue event
//!   ① Draw     — pick PoliteExit / AbruptExitAttempt / PatienceDecay
//!                (the abrupt-exit coin flip is part of the draw).
//!   ② Plan     — turn the event into a list of Transitions against the
//!                current queue (read-only pass).
//!   ③ Apply    — perform the transitions in order.
//!   ④ Reslot   — give every waiting client the next free slot target.
//!
//! advance_animation()  one interpolation frame
//!   ① Move     — slide x toward target_x; drift exiting clients up/down.
//!   ② Remove   — drop exiting clients that have left the viewport.
//! ```
//!
//! Both paths are total: an empty queue is a valid input and a no-op.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_sim::QueueSimBuilder;
//!
//! let mut sim = QueueSimBuilder::new(42).initial_clients(3).build()?;
//! let report = sim.step();
//! while sim.advance_animation().changed() {}
//! for view in sim.snapshot() {
//!     println!("{} at {} ({})", view.id, view.position, view.mood);
//! }
//! ```

pub mod animation;
pub mod builder;
pub mod event;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::QueueSimBuilder;
pub use event::{QueueEvent, Transition};
pub use observer::{NoopObserver, QueueObserver};
pub use report::{FrameReport, StepReport};
pub use sim::QueueSim;
