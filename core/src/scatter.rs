use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Gap between neighbouring slots, and the top margin of the first row.
pub const ROW_GAP: f64 = 10.0;

/// Colour channels stay below this so the white numbers remain readable.
const MAX_CHANNEL: u8 = 200;

/// Lays slots out left to right in creation order, wrapping to a new row when the next one would overflow.
pub fn row_layout(container_width: f64, slot: Extent, count: usize) -> Vec<Position> {
    let mut x = 0.0;
    let mut y = ROW_GAP;

    (0..count)
        .map(|_| {
            // never wrap the first slot of a row, it would overflow anyway
            if x > 0.0 && x + slot.width > container_width {
                x = 0.0;
                y += slot.height + ROW_GAP;
            }
            let position = Position::new(x, y);
            x += slot.width + ROW_GAP;
            position
        })
        .collect()
}

/// Randomness of a single game: slot colours and scramble positions.
#[derive(Clone, Debug)]
pub struct Scatter {
    rng: SmallRng,
}

impl Scatter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform position keeping a `slot` sized box inside `container`.
    pub fn position(&mut self, container: Extent, slot: Extent) -> Position {
        let slack = container.slack(slot);
        Position::new(
            self.rng.random_range(0.0..=slack.width),
            self.rng.random_range(0.0..=slack.height),
        )
    }

    pub fn positions(&mut self, container: Extent, slot: Extent, count: usize) -> Vec<Position> {
        (0..count).map(|_| self.position(container, slot)).collect()
    }

    pub fn color(&mut self) -> Rgb {
        Rgb(
            self.rng.random_range(0..MAX_CHANNEL),
            self.rng.random_range(0..MAX_CHANNEL),
            self.rng.random_range(0..MAX_CHANNEL),
        )
    }
}
