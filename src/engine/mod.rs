//! Pattern engine
//!
//! Splits a candidate set into families keyed by the pattern each word shows
//! for a guessed letter, and picks the family the game keeps.

mod families;
mod selector;

pub use families::{Families, partition};
pub use selector::{dominance_order, select_dominant_family};

use thiserror::Error;

/// Invariant violations inside the engine
///
/// These only occur when a caller skipped a precondition, so they are treated
/// as defects rather than input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot partition an empty candidate set")]
    EmptyInput,
    #[error("no families to choose from")]
    NoFamilies,
}
