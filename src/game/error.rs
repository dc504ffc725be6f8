//! Errors raised by a game session

use crate::core::{Letter, LetterError};
use crate::engine::EngineError;
use thiserror::Error;

/// Errors returned by [`GameSession`](super::GameSession)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no dictionary words of a usable length")]
    EmptyDictionary,

    #[error("invalid guess: {0}")]
    InvalidLetter(#[from] LetterError),

    #[error("you've already guessed '{0}'")]
    DuplicateGuess(Letter),

    #[error("the game is already over")]
    GameOver,

    #[error("engine invariant violated: {0}")]
    Engine(#[from] EngineError),
}

impl GameError {
    /// Input errors the driver should answer by prompting again
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidLetter(_) | Self::DuplicateGuess(_))
    }
}
