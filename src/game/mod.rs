//! Game session
//!
//! Owns the live candidate set, the revealed solution and the guess history,
//! and drives them through the pattern engine one guess at a time.

mod error;
mod history;
mod session;
mod solution;

pub use error::GameError;
pub use history::GuessHistory;
pub use session::{GameSession, GameStatus, GuessOutcome};
pub use solution::RevealedSolution;
