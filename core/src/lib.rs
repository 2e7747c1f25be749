#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use presenter::*;
pub use scatter::*;
pub use store::*;
pub use types::*;
pub use validator::*;

mod engine;
mod error;
mod presenter;
mod scatter;
mod store;
#[cfg(test)]
mod testing;
mod types;
mod validator;

/// Pacing of the reveal and scramble phases.
///
/// Every duration scales with the number of slots in the game: the player gets `reveal_per_slot_ms` to memorize each
/// slot and watches `scramble_rounds_per_slot` scramble ticks per slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub reveal_per_slot_ms: u32,
    pub scramble_period_ms: u32,
    pub scramble_rounds_per_slot: u16,
}

impl Timing {
    pub const fn new(
        reveal_per_slot_ms: u32,
        scramble_period_ms: u32,
        scramble_rounds_per_slot: u16,
    ) -> Self {
        Self {
            reveal_per_slot_ms,
            scramble_period_ms,
            scramble_rounds_per_slot,
        }
    }

    pub fn reveal_delay(&self, slots: SlotCount) -> Duration {
        Duration::from_millis(u64::from(self.reveal_per_slot_ms) * u64::from(slots))
    }

    pub fn scramble_period(&self) -> Duration {
        Duration::from_millis(self.scramble_period_ms.into())
    }

    pub const fn scramble_rounds(&self, slots: SlotCount) -> u16 {
        self.scramble_rounds_per_slot.saturating_mul(slots)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(1000, 2000, 1)
    }
}

/// User-visible notices, the text itself belongs to the front-end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Victory,
    Defeat,
    InvalidInput { min: SlotCount, max: SlotCount },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Correct,
    Won,
    Lost,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            Correct => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
