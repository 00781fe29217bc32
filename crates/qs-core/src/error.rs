//! Workspace error type.
//!
//! Simulation operations themselves are total; only construction from an
//! invalid [`QueueConfig`][crate::QueueConfig] can fail.

use thiserror::Error;

/// The base error type for `qs-core` and the crates built on it.
#[derive(Debug, Error)]
pub enum QsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `qs-*` crates.
pub type QsResult<T> = Result<T, QsError>;
