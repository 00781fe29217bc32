//! `qs-core` — foundational types for the `queue_sim` workspace.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no `qs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ClientId`                                            |
//! | [`geometry`]    | `Point`, `Viewport`                                   |
//! | [`time`]        | `Tick` (simulation steps), `Frame` (animation frames) |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | Named constants and `QueueConfig`                     |
//! | [`error`]       | `QsError`, `QsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::QueueConfig;
pub use error::{QsError, QsResult};
pub use geometry::{Point, Viewport};
pub use ids::ClientId;
pub use rng::SimRng;
pub use time::{Frame, Tick};
