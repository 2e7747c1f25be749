use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rendering side of the game.
///
/// The engine only ever passes back handles it received from [`Presenter::create_slots`], in the order they were
/// created, so `handles[i]` is always the slot with order index `i`. Clicks are not registered through the presenter:
/// the host forwards them to [`GameEngine::click`] with the handle that was clicked.
pub trait Presenter {
    type Handle: Clone + PartialEq + Debug;

    /// Drops every slot of the previous game.
    fn clear_slots(&mut self);

    /// Creates `n` slots, disabled and with a random colour each.
    fn create_slots(&mut self, n: SlotCount) -> Vec<Self::Handle>;

    fn layout(&mut self, handles: &[Self::Handle]);

    /// Shows the 1-based order number on each slot.
    fn show_numbers(&mut self, handles: &[Self::Handle]);

    fn hide_numbers(&mut self, handles: &[Self::Handle]);

    /// Moves every slot to an independent uniformly random spot that keeps it fully inside the play area.
    fn reposition_randomly(&mut self, handles: &[Self::Handle]);

    fn enable(&mut self, handles: &[Self::Handle]);

    fn disable(&mut self, handles: &[Self::Handle]);

    fn show_message(&mut self, message: Message);

    fn clear_message(&mut self) {}
}

/// Identifies a single call to [`GameEngine::start_game`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl GameId {
    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    RevealElapsed,
    ScrambleTick,
}

/// What a scheduled timer should hand back to [`GameEngine::on_timer`] when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerEvent {
    pub game: GameId,
    pub kind: TimerKind,
}

/// Timer facility of the host event loop.
///
/// Dropping a returned handle must cancel the timer, the engine relies on that to stop the previous game's timers.
pub trait Scheduler {
    type Handle;

    /// Fires `event` once after `delay`.
    fn once(&mut self, delay: Duration, event: TimerEvent) -> Self::Handle;

    /// Fires `event` every `period` until the handle is dropped.
    fn every(&mut self, period: Duration, event: TimerEvent) -> Self::Handle;
}
