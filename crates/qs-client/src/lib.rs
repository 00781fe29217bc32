//! `qs-client` — the client entity held in the queue.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`client`]   | `Client` record, `ExitDirection`                        |
//! | [`mood`]     | `Mood`, derived from remaining patience                 |
//! | [`view`]     | `ClientView` — owned, read-only copy for renderers      |
//!
//! `Client` carries data and a handful of mutators.  All queue rules (which
//! event fires, who gets which slot, how positions animate) live in
//! `qs-sim`.

pub mod client;
pub mod mood;
pub mod view;

#[cfg(test)]
mod tests;

pub use client::{Client, ExitDirection};
pub use mood::Mood;
pub use view::ClientView;
