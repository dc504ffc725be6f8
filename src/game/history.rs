//! Guess bookkeeping

use crate::core::{ALPHABET_SIZE, Letter};
use std::collections::BTreeSet;

/// Letters guessed so far and the ones that missed
///
/// Append-only for the life of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guessed: Vec<Letter>,
    incorrect: BTreeSet<Letter>,
}

impl GuessHistory {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, letter: Letter, hit: bool) {
        debug_assert!(!self.contains(letter), "letter recorded twice");
        self.guessed.push(letter);
        if !hit {
            self.incorrect.insert(letter);
        }
    }

    /// Check whether `letter` has been guessed
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters in the order they were played
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    /// Missed letters in alphabetical order
    #[must_use]
    pub const fn incorrect(&self) -> &BTreeSet<Letter> {
        &self.incorrect
    }

    /// Number of distinct letters guessed
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guessed.len()
    }

    /// Number of misses
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }

    /// Letters not yet guessed
    #[must_use]
    pub fn remaining(&self) -> usize {
        ALPHABET_SIZE - self.guessed.len()
    }

    /// Unguessed letters, alphabetically
    pub fn unguessed(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|&l| !self.contains(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn records_hits_and_misses() {
        let mut history = GuessHistory::new();
        history.record(letter('e'), true);
        history.record(letter('z'), false);
        history.record(letter('b'), false);

        let guessed: Vec<char> = history.guessed().iter().map(|l| l.as_char()).collect();
        let incorrect: Vec<char> = history.incorrect().iter().map(|l| l.as_char()).collect();
        assert_eq!(guessed, ['e', 'z', 'b']);
        assert_eq!(incorrect, ['b', 'z']);
        assert_eq!(history.incorrect_count(), 2);
    }

    #[test]
    fn remaining_counts_down_from_alphabet() {
        let mut history = GuessHistory::new();
        assert_eq!(history.remaining(), 26);
        history.record(letter('a'), true);
        assert_eq!(history.remaining(), 25);
        assert!(history.contains(letter('a')));
        assert!(!history.contains(letter('b')));
    }

    #[test]
    fn unguessed_skips_played_letters() {
        let mut history = GuessHistory::new();
        for c in ['a', 'c'] {
            history.record(letter(c), true);
        }
        let next: Vec<char> = history.unguessed().take(3).map(Letter::as_char).collect();
        assert_eq!(next, ['b', 'd', 'e']);
    }
}
