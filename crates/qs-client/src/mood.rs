//! Mood classification.

use std::fmt;

/// Three-level ordinal of how a client feels about the wait.
///
/// Derived from patience on read and never stored, so it can't drift out of
/// sync with the counter it describes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mood {
    /// Patience ≤ 2.
    Agitated,
    /// Patience 3–4.
    Neutral,
    /// Patience > 4.
    Calm,
}

impl Mood {
    pub fn from_patience(patience: i32) -> Mood {
        match patience {
            p if p > 4 => Mood::Calm,
            3 | 4      => Mood::Neutral,
            _          => Mood::Agitated,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mood::Calm     => "calm",
            Mood::Neutral  => "neutral",
            Mood::Agitated => "agitated",
        })
    }
}
