//! `qs-driver` — runs a [`QueueSim`][qs_sim::QueueSim] on two timers.
//!
//! # Timers
//!
//! | Timer  | Period (default) | Fires                         | Initially |
//! |--------|------------------|-------------------------------|-----------|
//! | step   | 1500 ms          | `QueueSim::step`              | stopped   |
//! | frame  | 20 ms            | `QueueSim::advance_animation` | running   |
//!
//! Both are plain [`Timer`] values owned by the [`Driver`]; nothing runs in
//! the background.  The caller feeds elapsed time to [`Driver::advance`],
//! which fires whatever fell due in chronological order on the caller's
//! thread.  Calls into the simulation can therefore never overlap.
//!
//! # Crate layout
//!
//! | Module          | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | [`scheduler`]   | `Timer` — a start/stop periodic timer handle      |
//! | [`renderer`]    | `Renderer` trait, `NoopRenderer`                  |
//! | [`driver`]      | `Driver`, `DriveReport`                           |

pub mod driver;
pub mod renderer;
pub mod scheduler;


pub use driver::{DriveReport, Driver};
pub use renderer::{NoopRenderer, Renderer};
pub use scheduler::Timer;
