//! Integer screen-space geometry.
//!
//! Coordinates are pixels with the origin at the top-left corner of the
//! viewport; `y` grows downward.

use std::fmt;

/// A position in screen space.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The visible area the queue is drawn into.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width:  i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Vertical centre line; clients wait in line along it.
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.height / 2
    }

    /// `true` once `p` has left the viewport: past the right edge, or more
    /// than `margin` pixels above the top or below the bottom.
    ///
    /// The left edge is never a threshold; clients only leave rightward.
    #[inline]
    pub fn is_past_bounds(&self, p: Point, margin: i32) -> bool {
        p.x > self.width || p.y < -margin || p.y > self.height + margin
    }
}
