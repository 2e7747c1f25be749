use alloc::vec::Vec;
use core::slice;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Revealing,
    Scrambling { rounds_done: u16 },
    AwaitingInput,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::AwaitingInput)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Drives one game from reveal to win or loss.
///
/// All work happens inside [`GameEngine::start_game`], [`GameEngine::on_timer`] and [`GameEngine::click`], which the
/// host calls from its single event loop. At most one timer is pending at any time and it is owned by the engine.
pub struct GameEngine<P: Presenter, S: Scheduler> {
    presenter: P,
    scheduler: S,
    timing: Timing,
    phase: GamePhase,
    store: SequenceStore,
    handles: Vec<P::Handle>,
    game: GameId,
    pending: Option<S::Handle>,
}

impl<P: Presenter, S: Scheduler> GameEngine<P, S> {
    pub fn new(presenter: P, scheduler: S, timing: Timing) -> Self {
        Self {
            presenter,
            scheduler,
            timing,
            phase: GamePhase::Idle,
            store: SequenceStore::new(),
            handles: Vec::new(),
            game: GameId::default(),
            pending: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Takes effect from the next [`GameEngine::start_game`].
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    pub fn game_id(&self) -> GameId {
        self.game
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle of the slot with order index `index` in the current game.
    pub fn handle(&self, index: SlotIndex) -> Option<&P::Handle> {
        self.handles.get(usize::from(index))
    }

    pub fn start_game(&mut self, n: SlotCount) -> Result<()> {
        if n == 0 {
            return Err(GameError::EmptySequence);
        }

        // cancels whatever the previous game still had scheduled
        self.pending = None;
        self.game = self.game.next();

        self.store.reset(n);
        self.presenter.clear_slots();
        self.presenter.clear_message();
        self.handles = self.presenter.create_slots(n);
        self.presenter.layout(&self.handles);
        self.presenter.show_numbers(&self.handles);

        let delay = self.timing.reveal_delay(n);
        self.pending = Some(self.scheduler.once(
            delay,
            TimerEvent {
                game: self.game,
                kind: TimerKind::RevealElapsed,
            },
        ));
        self.phase = GamePhase::Revealing;
        log::debug!("game {:?} started with {} slots, reveal for {:?}", self.game, n, delay);
        Ok(())
    }

    /// Returns whether the event was accepted, stale or unexpected events are dropped.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        use GamePhase::*;
        use TimerKind::*;

        if event.game != self.game {
            log::trace!("stale timer {:?}, current game is {:?}", event, self.game);
            return false;
        }

        match (self.phase, event.kind) {
            (Revealing, RevealElapsed) => {
                self.pending = None;
                self.start_scrambling();
                true
            }
            (Scrambling { rounds_done }, ScrambleTick) => {
                self.presenter.reposition_randomly(&self.handles);
                let rounds_done = rounds_done.saturating_add(1);
                self.phase = Scrambling { rounds_done };
                log::trace!("scramble round {}", rounds_done);

                if rounds_done >= self.scramble_rounds() {
                    self.prepare_for_input();
                }
                true
            }
            (phase, kind) => {
                log::trace!("ignoring {:?} timer in phase {:?}", kind, phase);
                false
            }
        }
    }

    pub fn click(&mut self, handle: &P::Handle) -> ClickOutcome {
        if !self.phase.accepts_input() {
            log::trace!("click on {:?} ignored in phase {:?}", handle, self.phase);
            return ClickOutcome::Ignored;
        }

        let Some(index) = self.handles.iter().position(|h| h == handle) else {
            log::trace!("click on unknown slot {:?}", handle);
            return ClickOutcome::Ignored;
        };
        let slot = self.store.slots()[index];
        if !slot.enabled {
            return ClickOutcome::Ignored;
        }

        if Some(slot.order_index()) == self.store.expected() {
            self.store.reveal(slot.order_index());
            self.presenter.show_numbers(slice::from_ref(handle));
            // cannot fail, the expected slot exists
            let _ = self.store.advance();

            if self.store.is_complete() {
                self.end_game(true);
                ClickOutcome::Won
            } else {
                ClickOutcome::Correct
            }
        } else {
            self.store.reveal_all();
            self.presenter.show_numbers(&self.handles);
            self.end_game(false);
            ClickOutcome::Lost
        }
    }

    fn scramble_rounds(&self) -> u16 {
        // store length is bounded by the SlotCount passed to start_game
        self.timing.scramble_rounds(self.store.len() as SlotCount)
    }

    fn start_scrambling(&mut self) {
        if self.scramble_rounds() == 0 {
            self.prepare_for_input();
            return;
        }

        self.phase = GamePhase::Scrambling { rounds_done: 0 };
        self.pending = Some(self.scheduler.every(
            self.timing.scramble_period(),
            TimerEvent {
                game: self.game,
                kind: TimerKind::ScrambleTick,
            },
        ));
        log::debug!("scrambling {} rounds", self.scramble_rounds());
    }

    fn prepare_for_input(&mut self) {
        self.pending = None;
        self.presenter.hide_numbers(&self.handles);
        self.store.set_enabled_all(true);
        self.presenter.enable(&self.handles);
        self.phase = GamePhase::AwaitingInput;
        log::debug!("awaiting input");
    }

    fn end_game(&mut self, won: bool) {
        self.store.set_enabled_all(false);
        self.presenter.disable(&self.handles);
        let (phase, message) = if won {
            (GamePhase::Won, Message::Victory)
        } else {
            (GamePhase::Lost, Message::Defeat)
        };
        self.presenter.show_message(message);
        self.phase = phase;
        log::debug!("game {:?} ended: {:?}", self.game, phase);
    }
}
