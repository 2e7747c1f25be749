use thiserror::Error;

use crate::SlotCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Expected a whole number between {min} and {max}")]
    InvalidInput { min: SlotCount, max: SlotCount },
    #[error("A game needs at least one slot")]
    EmptySequence,
    #[error("Every slot is already resolved")]
    SequenceComplete,
}

pub type Result<T> = core::result::Result<T, GameError>;
