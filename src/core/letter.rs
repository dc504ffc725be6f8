//! A single guessable letter

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters a player can guess
pub const ALPHABET_SIZE: usize = 26;

/// A lowercase ASCII letter `a`-`z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for rejected letter input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not a letter between a and z")]
    NotAlphabetic(char),
    #[error("expected exactly one letter, got {0} characters")]
    WrongLength(usize),
}

impl Letter {
    /// Validate a character as a guessable letter
    ///
    /// Uppercase ASCII letters are folded to lowercase.
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `A-Z`/`a-z`.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// The letter as a lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// The letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Iterate over `a` through `z`
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    /// Parse a line of input that must hold exactly one letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(LetterError::WrongLength(s.chars().count())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_accepts_lowercase() {
        assert_eq!(Letter::new('e').unwrap().byte(), b'e');
    }

    #[test]
    fn letter_folds_uppercase() {
        assert_eq!(Letter::new('E').unwrap(), Letter::new('e').unwrap());
    }

    #[test]
    fn letter_rejects_non_letters() {
        for c in ['1', '@', ' ', '_', 'é', 'ß'] {
            assert_eq!(Letter::new(c), Err(LetterError::NotAlphabetic(c)));
        }
    }

    #[test]
    fn letter_from_str_requires_one_char() {
        assert_eq!("a".parse::<Letter>().unwrap().as_char(), 'a');
        assert_eq!("".parse::<Letter>(), Err(LetterError::WrongLength(0)));
        assert_eq!("abc".parse::<Letter>(), Err(LetterError::WrongLength(3)));
        assert_eq!("@".parse::<Letter>(), Err(LetterError::NotAlphabetic('@')));
    }

    #[test]
    fn alphabet_has_26_letters() {
        let all: Vec<char> = Letter::all().map(Letter::as_char).collect();
        assert_eq!(all.len(), ALPHABET_SIZE);
        assert_eq!(all.first(), Some(&'a'));
        assert_eq!(all.last(), Some(&'z'));
    }
}
