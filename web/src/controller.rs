use mnemo_core::{GameEngine, InputValidator, Presenter, Result, Scheduler};

/// Entry point of the start form: validates the raw count before a game may start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct AppController {
    validator: InputValidator,
}

impl AppController {
    pub(crate) fn new(validator: InputValidator) -> Self {
        Self { validator }
    }

    pub(crate) fn validator(&self) -> InputValidator {
        self.validator
    }

    /// Starts a game, or shows the range error and leaves the current game untouched.
    pub(crate) fn submit<P: Presenter, S: Scheduler>(
        &self,
        engine: &mut GameEngine<P, S>,
        raw: &str,
    ) -> Result<()> {
        match self.validator.parse(raw) {
            Ok(n) => engine.start_game(n),
            Err(err) => {
                log::info!("rejected input {:?}: {}", raw, err);
                engine
                    .presenter_mut()
                    .show_message(self.validator.error_message());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardPresenter, SeedSource};
    use core::time::Duration;
    use mnemo_core::{Extent, GameError, GamePhase, Message, TimerEvent, Timing};

    struct NoTimers;

    impl Scheduler for NoTimers {
        type Handle = ();

        fn once(&mut self, _delay: Duration, _event: TimerEvent) -> Self::Handle {}

        fn every(&mut self, _period: Duration, _event: TimerEvent) -> Self::Handle {}
    }

    fn engine() -> GameEngine<BoardPresenter, NoTimers> {
        let presenter = BoardPresenter::new(Extent::new(100.0, 50.0), SeedSource::Forced(1));
        GameEngine::new(presenter, NoTimers, Timing::default())
    }

    #[test]
    fn valid_input_starts_the_game() {
        let controller = AppController::new(InputValidator::new(3, 7));
        let mut engine = engine();

        controller.submit(&mut engine, "5").unwrap();

        assert_eq!(engine.phase(), GamePhase::Revealing);
        assert_eq!(engine.presenter().slots().len(), 5);
        assert!(engine.presenter().slots().iter().all(|slot| slot.number_visible));
        assert_eq!(engine.presenter().message(), None);
    }

    #[test]
    fn invalid_input_shows_error_without_starting() {
        let controller = AppController::new(InputValidator::new(3, 7));
        let mut engine = engine();

        for raw in ["2", "5.5", "", "abc"] {
            assert_eq!(
                controller.submit(&mut engine, raw),
                Err(GameError::InvalidInput { min: 3, max: 7 })
            );
        }

        assert_eq!(engine.phase(), GamePhase::Idle);
        assert!(engine.presenter().slots().is_empty());
        assert_eq!(
            engine.presenter().message(),
            Some(Message::InvalidInput { min: 3, max: 7 })
        );
    }

    #[test]
    fn invalid_input_mid_game_keeps_the_running_game() {
        let controller = AppController::new(InputValidator::new(3, 7));
        let mut engine = engine();
        controller.submit(&mut engine, "3").unwrap();
        let game = engine.game_id();

        assert!(controller.submit(&mut engine, "8").is_err());

        assert_eq!(engine.game_id(), game);
        assert_eq!(engine.phase(), GamePhase::Revealing);
        assert_eq!(engine.presenter().slots().len(), 3);
    }
}
