use core::fmt;
use serde::{Deserialize, Serialize};

/// Count type used for the number of slots in a game.
pub type SlotCount = u16;

/// Position of a slot in the original sequence, 0-based.
pub type SlotIndex = u16;

/// Size of a rectangle in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Room left for the top-left corner of `inner` so that it still fits, never negative.
    pub fn slack(self, inner: Extent) -> Extent {
        Extent {
            width: (self.width - inner.width).max(0.0),
            height: (self.height - inner.height).max(0.0),
        }
    }
}

/// Top-left offset inside the play area in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = *self;
        write!(f, "rgb({}, {}, {})", r, g, b)
    }
}
