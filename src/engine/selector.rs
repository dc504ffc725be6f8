//! Dominant family selection
//!
//! The game always keeps the largest family, which leaves the guesser with
//! as many possible words as it can. Among families of equal size the pattern
//! that is smallest in byte order wins. `_` sorts below every letter, so a
//! tie prefers hiding the guessed letter, then revealing it further right.

use super::{EngineError, Families};
use crate::core::Pattern;
use std::cmp::Ordering;

/// Order two `(pattern, family size)` pairs by dominance
///
/// `Ordering::Less` means `a` is kept over `b`.
#[must_use]
pub fn dominance_order(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Select the pattern of the family the game keeps
///
/// # Errors
/// Returns `EngineError::NoFamilies` if the partition is empty.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Word};
/// use evil_hangman::engine::{partition, select_dominant_family};
///
/// let words: Vec<Word> = ["apple", "ample", "actor"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let families = partition(&words, Letter::new('p').unwrap()).unwrap();
///
/// // Three singleton families; the all-blank pattern wins the tie
/// let chosen = select_dominant_family(&families).unwrap();
/// assert_eq!(chosen.to_string(), "_____");
/// ```
pub fn select_dominant_family(families: &Families) -> Result<Pattern, EngineError> {
    families
        .iter()
        .min_by(|(pa, wa), (pb, wb)| dominance_order((*pa, wa.len()), (*pb, wb.len())))
        .map(|(pattern, _)| pattern.clone())
        .ok_or(EngineError::NoFamilies)
}
