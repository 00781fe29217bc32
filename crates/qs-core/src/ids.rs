//! Strongly typed client identifier.
//!
//! Ids are handed out by the simulation in strictly increasing order starting
//! at [`ClientId::FIRST`] and are never reused, so comparing two ids also
//! compares their arrival order.

use std::fmt;

/// Identity of one client in the queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientId(pub u32);

impl ClientId {
    /// The first id a fresh simulation assigns.
    pub const FIRST: ClientId = ClientId(1);

    /// The id that follows `self` in creation order.
    #[inline(always)]
    pub fn next(self) -> ClientId {
        ClientId(self.0 + 1)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}
