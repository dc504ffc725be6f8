//! The player's view of the word

use crate::core::{BLANK, Letter, Pattern};
use std::fmt;

/// Revealed letters so far, blanks elsewhere
///
/// Positions only ever go from blank to a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedSolution {
    cells: Vec<u8>,
    remaining: usize,
}

impl RevealedSolution {
    /// An all-blank solution for a word of `len` letters
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![BLANK; len],
            remaining: len,
        }
    }

    /// Reveal every position where `pattern` shows `letter`
    ///
    /// Returns how many positions were newly revealed.
    ///
    /// # Panics
    /// Panics in debug mode if the pattern length differs from the solution.
    pub fn apply(&mut self, pattern: &Pattern, letter: Letter) -> usize {
        debug_assert_eq!(pattern.len(), self.cells.len(), "pattern length mismatch");

        let guess = letter.byte();
        let mut revealed = 0;
        for (cell, &shown) in self.cells.iter_mut().zip(pattern.bytes()) {
            if shown == guess && *cell == BLANK {
                *cell = guess;
                revealed += 1;
            }
        }
        self.remaining -= revealed;
        revealed
    }

    /// True once no blanks remain
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.remaining == 0
    }

    /// Number of blank positions left
    #[must_use]
    pub const fn blanks(&self) -> usize {
        self.remaining
    }

    /// Word length
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for a zero-length solution
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The revealed letter at `position`, or `None` while blank
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.cells
            .get(position)
            .filter(|&&b| b != BLANK)
            .map(|&b| b as char)
    }

    /// Raw cells: lowercase letters and `_`
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.cells
    }
}

impl fmt::Display for RevealedSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.cells))
    }
}
