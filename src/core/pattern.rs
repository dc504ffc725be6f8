//! Hangman family pattern
//!
//! A pattern is the view of a word after a single guess: every position
//! holding the guessed letter shows it, every other position shows [`BLANK`].
//! Words sharing a pattern form one family.
//!
//! Patterns order by their raw bytes, and since `_` (0x5F) sorts below every
//! lowercase letter, "fewer and later reveals" sorts first.

use super::{Letter, Word};
use std::fmt;

/// Marker for an unrevealed position
pub const BLANK: u8 = b'_';

/// Masked view of a word for one guessed letter
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Box<[u8]>);

impl Pattern {
    /// Calculate the pattern `word` shows when `letter` is guessed
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, Pattern, Word};
    ///
    /// let word = Word::new("apple").unwrap();
    /// let p = Letter::new('p').unwrap();
    /// assert_eq!(Pattern::of(&word, p).to_string(), "_pp__");
    /// ```
    #[must_use]
    pub fn of(word: &Word, letter: Letter) -> Self {
        let guess = letter.byte();
        Self(
            word.bytes()
                .iter()
                .map(|&b| if b == guess { b } else { BLANK })
                .collect(),
        )
    }

    /// A pattern with every position blank
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK; len].into_boxed_slice())
    }

    /// Parse a pattern from a string like `"_pp__"`
    ///
    /// Returns `None` for an empty string or any character that is neither a
    /// lowercase ASCII letter nor `_`.
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b == BLANK || b.is_ascii_lowercase()) {
            return None;
        }
        Some(Self(s.as_bytes().into()))
    }

    /// Raw pattern bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the degenerate zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the pattern reveals `letter` anywhere
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter.byte())
    }

    /// Count revealed (non-blank) positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|&&b| b != BLANK).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bytes are ASCII by construction
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn pattern_reveals_every_occurrence() {
        assert_eq!(Pattern::of(&word("apple"), letter('p')).to_string(), "_pp__");
        assert_eq!(Pattern::of(&word("ample"), letter('p')).to_string(), "__p__");
        assert_eq!(Pattern::of(&word("banana"), letter('a')).to_string(), "_a_a_a");
    }

    #[test]
    fn pattern_all_blank_when_absent() {
        let pattern = Pattern::of(&word("actor"), letter('x'));
        assert_eq!(pattern, Pattern::blank(5));
        assert_eq!(pattern.revealed_count(), 0);
        assert!(!pattern.contains(letter('x')));
    }

    #[test]
    fn pattern_length_matches_word() {
        for text in ["a", "ox", "dragonfly"] {
            assert_eq!(Pattern::of(&word(text), letter('o')).len(), text.len());
        }
    }

    #[test]
    fn pattern_contains_and_counts() {
        let pattern = Pattern::of(&word("coffee"), letter('f'));
        assert!(pattern.contains(letter('f')));
        assert!(!pattern.contains(letter('e')));
        assert_eq!(pattern.revealed_count(), 2);
    }

    #[test]
    fn pattern_from_str_valid() {
        let parsed = Pattern::from_str("_pp__").unwrap();
        assert_eq!(parsed, Pattern::of(&word("apple"), letter('p')));
        assert_eq!("a____".parse::<Pattern>().unwrap().to_string(), "a____");
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("").is_none());
        assert!(Pattern::from_str("_P___").is_none());
        assert!(Pattern::from_str("a-b").is_none());
    }

    #[test]
    fn blanks_sort_before_letters() {
        let hidden = Pattern::from_str("_____").unwrap();
        let right = Pattern::from_str("____a").unwrap();
        let left = Pattern::from_str("a____").unwrap();
        assert!(hidden < right);
        assert!(right < left);
    }
}
